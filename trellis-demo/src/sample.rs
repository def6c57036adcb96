//! Bundled sample users for the table.

use serde::Deserialize;
use trellis::prelude::{Column, FieldValue, Record};

use crate::error::DemoError;

const USERS_JSON: &str = include_str!("../data/users.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl Record for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, data_index: &str) -> Option<FieldValue> {
        match data_index {
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "age" => Some(self.age.into()),
            _ => None,
        }
    }
}

pub fn load_users() -> Result<Vec<User>, DemoError> {
    let users: Vec<User> = serde_json::from_str(USERS_JSON)?;
    log::debug!("loaded {} sample users", users.len());
    Ok(users)
}

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(true).flex(1),
        Column::new("email", "Email").flex(2),
        Column::new("age", "Age").sortable(true).fixed(5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_users_parse() {
        let users = load_users().expect("bundled json is valid");
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert_eq!(users[1].field("age"), Some(FieldValue::Int(30)));
        assert_eq!(users[0].field("missing"), None);
    }
}
