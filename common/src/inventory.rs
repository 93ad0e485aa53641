use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryNote {
    pub text: String,
    pub found: bool,
}

/// What the player has picked up. Flags only ever go from unfound to found.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub has_heart: bool,
    pub notes: Vec<MemoryNote>,
}

impl Inventory {
    pub fn new<I, S>(note_texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            has_heart: false,
            notes: note_texts
                .into_iter()
                .map(|text| MemoryNote {
                    text: text.into(),
                    found: false,
                })
                .collect(),
        }
    }

    /// Marks the earliest unfound note as found.
    pub fn find_next_note(&mut self) -> Option<(usize, &str)> {
        let (index, note) = self.notes.iter_mut().enumerate().find(|(_, note)| !note.found)?;
        note.found = true;
        Some((index, note.text.as_str()))
    }

    pub fn notes_found(&self) -> usize {
        self.notes.iter().filter(|note| note.found).count()
    }
}
