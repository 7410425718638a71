// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Heterogeneous fixture values for exercising the operators with
//! non-`Copy` payloads.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Animal {
    pub species: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Plant {
    pub name: String,
    pub height_cm: u32,
}

/// Fixture payload: one of three unrelated record kinds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    /// Display name of the wrapped record.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Animal(a) => &a.species,
            Self::Plant(p) => &p.name,
        }
    }
}

#[must_use]
pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(Person {
        name: name.to_string(),
        age,
    })
}

#[must_use]
pub fn animal(species: &str, legs: u32) -> TestData {
    TestData::Animal(Animal {
        species: species.to_string(),
        legs,
    })
}

#[must_use]
pub fn plant(name: &str, height_cm: u32) -> TestData {
    TestData::Plant(Plant {
        name: name.to_string(),
        height_cm,
    })
}

#[must_use]
pub fn person_alice() -> TestData {
    person("Alice", 25)
}

#[must_use]
pub fn person_bob() -> TestData {
    person("Bob", 30)
}

#[must_use]
pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

#[must_use]
pub fn person_diane() -> TestData {
    person("Diane", 40)
}

#[must_use]
pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

#[must_use]
pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

#[must_use]
pub fn plant_rose() -> TestData {
    plant("Rose", 15)
}

#[must_use]
pub fn plant_sunflower() -> TestData {
    plant("Sunflower", 180)
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(p) => write!(f, "Person({}, {})", p.name, p.age),
            Self::Animal(a) => write!(f, "Animal({}, {} legs)", a.species, a.legs),
            Self::Plant(p) => write!(f, "Plant({}, {}cm)", p.name, p.height_cm),
        }
    }
}
