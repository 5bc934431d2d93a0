// Member entity
//
// Plain value object: identity is the pair of fields, nothing else.
// Uniqueness of member_id is the store's job (primary key), not ours.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Primary key in the `member` table
    pub member_id: String,

    /// Balance
    pub money: i32,
}

impl Member {
    pub fn new(member_id: impl Into<String>, money: i32) -> Self {
        Member {
            member_id: member_id.into(),
            money,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member(memberId={}, money={})", self.member_id, self.money)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_equality_is_by_value() {
        let member = Member::new("memberV0", 10000);
        let copy = Member::new(String::from("memberV0"), 10000);

        assert_eq!(member, copy);
        assert_ne!(member, Member::new("memberV0", 20000));
        assert_ne!(member, Member::new("memberV1", 10000));
    }

    #[test]
    fn test_member_display() {
        let member = Member::new("memberA", 10000);

        assert_eq!(member.to_string(), "Member(memberId=memberA, money=10000)");
    }

    #[test]
    fn test_member_json_field_names() {
        let json = serde_json::to_value(Member::new("memberA", 500)).unwrap();

        assert_eq!(json, serde_json::json!({"memberId": "memberA", "money": 500}));
    }
}
