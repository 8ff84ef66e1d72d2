/// A person with a name, an age and the city they live in.
///
/// Fields can only be set through [`Person::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: i32,
    city: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
        }
    }

    /// The two people introduced when no subcommand is given.
    pub fn samples() -> [Person; 2] {
        [
            Person::new("David", 52, "Sapulpa OK"),
            Person::new("Bob", 30, "Los Angeles"),
        ]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn greet(&self) -> String {
        format!("Hello, my name is {}", self.name)
    }

    pub fn info(&self) -> String {
        format!(
            "{} is {} years old and lives in {}",
            self.name, self.age, self.city
        )
    }
}
