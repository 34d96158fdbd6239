//! Builders for contact rows

use contacts_model::{Kind, Row, columns};

/// Builds the rows of one contact. Every row carries the primary columns.
pub struct ContactRows {
    id: i64,
    display_name: String,
    has_phone_number: bool,
    rows: Vec<Row>,
}

impl ContactRows {
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            has_phone_number: false,
            rows: Vec::new(),
        }
    }

    fn row(&self, kind: Kind) -> Row {
        Row::new()
            .with(columns::CONTACT_ID, self.id)
            .with(columns::MIMETYPE, kind.tag())
            .with(columns::DISPLAY_NAME, self.display_name.as_str())
            .with(columns::SORT_KEY, self.display_name.to_lowercase())
    }

    pub fn name(mut self, given: &str, family: &str) -> Self {
        let row = self
            .row(Kind::StructuredName)
            .with(columns::DATA2, given)
            .with(columns::DATA3, family);
        self.rows.push(row);
        self
    }

    /// Phone row with a type code (2 = mobile, 0 = custom)
    pub fn phone(mut self, number: &str, phone_type: i64) -> Self {
        let row = self
            .row(Kind::Phone)
            .with(columns::DATA1, number)
            .with(columns::DATA2, phone_type)
            .with(columns::DATA4, number.replace([' ', '-'], ""));
        self.rows.push(row);
        self.has_phone_number = true;
        self
    }

    pub fn email(mut self, address: &str, email_type: i64) -> Self {
        let row = self
            .row(Kind::Email)
            .with(columns::DATA1, address)
            .with(columns::DATA2, email_type);
        self.rows.push(row);
        self
    }

    pub fn birthday(mut self, date: &str) -> Self {
        let row = self
            .row(Kind::Event)
            .with(columns::DATA1, date)
            .with(columns::DATA2, 3);
        self.rows.push(row);
        self
    }

    pub fn company(mut self, company: &str, title: &str) -> Self {
        let row = self
            .row(Kind::Organization)
            .with(columns::DATA1, company)
            .with(columns::DATA4, title);
        self.rows.push(row);
        self
    }

    /// Finish, stamping `has_phone_number` onto every row
    pub fn build(self) -> Vec<Row> {
        let flag = i64::from(self.has_phone_number);
        self.rows
            .into_iter()
            .map(|row| row.with(columns::HAS_PHONE_NUMBER, flag))
            .collect()
    }
}

/// A small address book used across tests
///
/// | id | name        | phone            | email             |
/// |----|-------------|------------------|-------------------|
/// | 1  | Ann Lee     | +15551234567     | ann@example.com   |
/// | 2  | Bob O'Brien | +15559876543     |                   |
/// | 3  | Cyd Park    |                  | cyd@example.com   |
/// | 4  | Dee Ng      | +15551234567 (2) | dee@work.example  |
pub fn address_book() -> Vec<Row> {
    [
        ContactRows::new(1, "Ann Lee")
            .name("Ann", "Lee")
            .phone("+15551234567", 2)
            .email("ann@example.com", 1)
            .birthday("1990-04-01")
            .build(),
        ContactRows::new(2, "Bob O'Brien")
            .name("Bob", "O'Brien")
            .phone("+15559876543", 1)
            .company("Acme", "Engineer")
            .build(),
        ContactRows::new(3, "Cyd Park")
            .name("Cyd", "Park")
            .email("cyd@example.com", 2)
            .build(),
        ContactRows::new(4, "Dee Ng")
            .phone("+15551234567", 3)
            .phone("+15550000000", 2)
            .email("dee@work.example", 2)
            .build(),
    ]
    .concat()
}
