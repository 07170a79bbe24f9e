/// Kinds of course material the portal accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Midsem,
    Endsem,
    Quiz,
    LectureNote,
    Assignments,
}

impl MaterialType {
    pub const ALL: [MaterialType; 5] = [
        MaterialType::Midsem,
        MaterialType::Endsem,
        MaterialType::Quiz,
        MaterialType::LectureNote,
        MaterialType::Assignments,
    ];

    /// The label shown in the type selector and sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialType::Midsem => "Midsem",
            MaterialType::Endsem => "Endsem",
            MaterialType::Quiz => "Quiz",
            MaterialType::LectureNote => "Lecture Note",
            MaterialType::Assignments => "Assignments",
        }
    }

    pub fn parse(label: &str) -> Option<MaterialType> {
        MaterialType::ALL.into_iter().find(|t| t.as_str() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for kind in MaterialType::ALL {
            assert_eq!(MaterialType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn lecture_note_label_keeps_its_space() {
        assert_eq!(MaterialType::LectureNote.as_str(), "Lecture Note");
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(MaterialType::parse("Tutorial"), None);
        assert_eq!(MaterialType::parse("midsem"), None);
        assert_eq!(MaterialType::parse(""), None);
    }
}
