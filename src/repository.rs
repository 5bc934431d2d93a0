// Member repository - raw SQL over a fresh connection per call
//
// Every operation: acquire connection -> prepare statement -> bind -> execute
// -> release (cursor, statement, connection). Values are always bound as
// parameters, never formatted into the SQL text.

use rusqlite::{params, Statement};
use tracing::{debug, error, info};

use crate::connection::{close, ConnectionProvider};
use crate::error::{RepositoryError, Result};
use crate::member::Member;

const SQL_INSERT: &str = "insert into member(member_id, money) values (?1, ?2)";
const SQL_SELECT_BY_ID: &str = "select * from member where member_id = ?1";
const SQL_UPDATE_MONEY: &str = "update member set money=?1 where member_id=?2";
const SQL_DELETE: &str = "delete from member where member_id=?1";

/// CRUD for [`Member`] against the `member` table.
///
/// Holds no state besides the provider, so it can be shared across threads;
/// each call owns its own connection.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    provider: ConnectionProvider,
}

impl MemberRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        MemberRepository { provider }
    }

    /// Insert a new row. Fails with a constraint violation if the id exists.
    pub fn save(&self, member: &Member) -> Result<Member> {
        self.with_statement(SQL_INSERT, |stmt| {
            stmt.execute(params![member.member_id, member.money])
        })?;

        Ok(member.clone())
    }

    /// Look up one member by primary key.
    ///
    /// Returns [`RepositoryError::NotFound`] when no row matches.
    pub fn find_by_id(&self, member_id: &str) -> Result<Member> {
        let found = self.with_statement(SQL_SELECT_BY_ID, |stmt| {
            let mut rows = stmt.query(params![member_id])?;

            // The cursor starts before the first row
            match rows.next()? {
                Some(row) => Ok(Some(Member {
                    member_id: row.get("member_id")?,
                    money: row.get("money")?,
                })),
                None => Ok(None),
            }
        })?;

        found.ok_or_else(|| {
            debug!(member_id, "member not found");
            RepositoryError::NotFound {
                member_id: member_id.to_string(),
            }
        })
    }

    /// Set `money` for `member_id`. Returns the affected-row count (0 if absent).
    pub fn update(&self, member_id: &str, money: i32) -> Result<usize> {
        let result_size = self.with_statement(SQL_UPDATE_MONEY, |stmt| {
            stmt.execute(params![money, member_id])
        })?;

        info!(result_size, "update");
        Ok(result_size)
    }

    /// Remove the row for `member_id`. Returns the affected-row count (0 if absent).
    pub fn delete(&self, member_id: &str) -> Result<usize> {
        self.with_statement(SQL_DELETE, |stmt| stmt.execute(params![member_id]))
    }

    /// Run `f` against a freshly prepared statement on a fresh connection.
    ///
    /// Whatever `f` returns, the statement is finalized and then the connection
    /// closed. Release failures are logged by `close` and never override the
    /// outcome of `f`.
    fn with_statement<T, F>(&self, sql: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Statement<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.provider.get_connection()?;

        let outcome = match conn.prepare(sql) {
            Ok(mut stmt) => {
                let outcome = f(&mut stmt);
                close(stmt);
                outcome
            }
            Err(err) => Err(err),
        };
        close(conn);

        outcome.map_err(|err| {
            error!(sql, error = %err, "db error");
            RepositoryError::Store(err)
        })
    }
}
