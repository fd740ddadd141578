/// Employee record as stored in the `employees` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub job_title: String,
    pub city: String,
    pub state: String,
    pub password_hash: String,
}

impl Employee {
    /// Display location, `"{city}, {state}"`
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Whether `key` is exactly this employee's email or username.
    pub fn matches_key(&self, key: &str) -> bool {
        self.email == key || self.username == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            employee_id: 1,
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            username: "ana".into(),
            email: "ana@spa.test".into(),
            phone_number: "555-0100".into(),
            job_title: "Esthetician".into(),
            city: "Austin".into(),
            state: "TX".into(),
            password_hash: String::new(),
        }
    }

    #[test]
    fn location_joins_city_and_state() {
        assert_eq!(sample().location(), "Austin, TX");
    }

    #[test]
    fn key_match_is_exact_and_case_sensitive() {
        let e = sample();
        assert!(e.matches_key("ana"));
        assert!(e.matches_key("ana@spa.test"));
        assert!(!e.matches_key("ANA"));
        assert!(!e.matches_key("ana@spa"));
    }
}
