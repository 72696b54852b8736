use serde::{Deserialize, Serialize};

pub use entity::sea_orm_active_enums::{Gender, SkillLevel};

/// A registered participant of a stage, as handed to the formation engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub level: Option<SkillLevel>,
    pub gender: Option<Gender>,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: None,
            gender: None,
        }
    }

    pub fn with_level(mut self, level: SkillLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}
