/// Customer record as stored in the `customers` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
}

impl Customer {
    /// Whether `key` is exactly this customer's email or username.
    pub fn matches_key(&self, key: &str) -> bool {
        self.email == key || self.username == key
    }
}
