//! Person and student records
//!
//! Plain data records; `Student` composes a `Person` rather than inheriting
//! from one, so shared behavior lives on the embedded record.

/// A named person with an age
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl Person {
    /// Create a person
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Greeting message
    pub fn greet(&self) -> String {
        format!("Hi, my name is {} and I am {} years old.", self.name, self.age)
    }

    /// Increment the age and return the birthday message
    pub fn have_birthday(&mut self) -> String {
        self.age += 1;
        format!("Happy Birthday {}! You are now {}.", self.name, self.age)
    }
}

/// A person enrolled in a grade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// The underlying person record
    pub person: Person,
    /// Grade level
    pub grade: u32,
}

impl Student {
    /// Create a student
    pub fn new(name: impl Into<String>, age: u32, grade: u32) -> Self {
        Self {
            person: Person::new(name, age),
            grade,
        }
    }

    /// Greeting message, delegated to the person record
    pub fn greet(&self) -> String {
        self.person.greet()
    }

    /// Message about the subject being studied
    pub fn study(&self, subject: &str) -> String {
        format!("{} is studying {}.", self.person.name, subject)
    }

    /// Message naming the student's grade
    pub fn grade_summary(&self) -> String {
        format!("{} is in grade {}.", self.person.name, self.grade)
    }
}
