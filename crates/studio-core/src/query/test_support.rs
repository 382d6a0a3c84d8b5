use super::{Entity, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Id,
    Name,
    Rank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: i32,
    pub name: String,
    pub rank: Option<i32>,
}

impl Row {
    pub fn new(id: i32, name: &str, rank: Option<i32>) -> Self {
        Self {
            id,
            name: name.to_owned(),
            rank,
        }
    }
}

impl Entity for Row {
    type Field = RowField;
    const NAME: &'static str = "row";
    const ID: RowField = RowField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: RowField) -> Value {
        match field {
            RowField::Id => self.id.into(),
            RowField::Name => (&self.name).into(),
            RowField::Rank => self.rank.into(),
        }
    }
}
