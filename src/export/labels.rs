use crate::config::Language;

/// Fixed texts written into the exported sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub number: &'static str,
    pub name: &'static str,
    pub rate: &'static str,
    pub present: &'static str,
    pub absent: &'static str,
    pub sheet: &'static str,
}

impl Labels {
    pub const KO: Labels = Labels {
        number: "번호",
        name: "이름",
        rate: "출석률",
        present: "출석",
        absent: "결석",
        sheet: "출석부",
    };

    pub const EN: Labels = Labels {
        number: "No.",
        name: "Name",
        rate: "Attendance Rate (%)",
        present: "Present",
        absent: "Absent",
        sheet: "Attendance",
    };

    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::Ko => Self::KO,
            Language::En => Self::EN,
        }
    }

    pub fn mark(&self, present: bool) -> &'static str {
        if present { self.present } else { self.absent }
    }
}
