//! # User snapshot and profile presentation helpers
//!
//! [`UserInfo`] is the cached identity handed over by the sign-in flow. The
//! main page only reads it. The wire shape mirrors the portal's session
//! payload, where the role is a single letter (`"T"` for teachers, anything
//! else is treated as a student).
//!
//! [`profile_lines`] decides what the profile card shows and in which order,
//! so the component itself only maps lines to spans.

use serde::{Deserialize, Deserializer, Serialize};

/// Label shown next to a teacher's name.
pub const TEACHER_LABEL: &str = "선생님";

/// Role of the signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "T")]
    Teacher,
    #[serde(rename = "S", other)]
    Student,
}

/// Read-only snapshot of the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    #[serde(default, deserialize_with = "lenient_number")]
    pub grade: Option<u8>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub class: Option<u8>,
    /// Photo references, most recent first.
    #[serde(default)]
    pub photo: Vec<String>,
}

impl UserInfo {
    pub fn is_teacher(&self) -> bool {
        self.user_type == UserType::Teacher
    }

    /// The first photo reference, if it is present and non-empty.
    pub fn primary_photo(&self) -> Option<&str> {
        self.photo
            .first()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}

/// Accept grade/class as a number or a numeric string. Anything else reads as
/// missing instead of rejecting the whole snapshot.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let value = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => u8::try_from(n).ok(),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    };
    Ok(value)
}

/// One span of the profile card's info line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileLine {
    Name(String),
    Serial(String),
}

impl ProfileLine {
    pub fn text(&self) -> &str {
        match self {
            ProfileLine::Name(s) | ProfileLine::Serial(s) => s,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProfileLine::Name(_) => "profile-info-name",
            ProfileLine::Serial(_) => "profile-info-serial",
        }
    }
}

/// Lines to render for a user, in display order.
///
/// Teachers read "name, label"; students read "grade/class, name". A student
/// without both grade and class gets only the name.
pub fn profile_lines(info: &UserInfo) -> Vec<ProfileLine> {
    if info.is_teacher() {
        return vec![
            ProfileLine::Name(info.name.clone()),
            ProfileLine::Serial(TEACHER_LABEL.to_string()),
        ];
    }

    let mut lines = Vec::with_capacity(2);
    if let (Some(grade), Some(class)) = (info.grade, info.class) {
        lines.push(ProfileLine::Serial(format!("{grade}학년 {class}반")));
    }
    lines.push(ProfileLine::Name(info.name.clone()));
    lines
}

/// Build the URL of a user photo served from the API host.
pub fn photo_url(base: &str, reference: &str) -> String {
    format!("{}/user_photo/{}", base.trim_end_matches('/'), reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> UserInfo {
        UserInfo {
            name: "김디미".to_string(),
            user_type: UserType::Student,
            grade: Some(2),
            class: Some(4),
            photo: vec!["abc.jpg".to_string()],
        }
    }

    fn teacher() -> UserInfo {
        UserInfo {
            name: "이선생".to_string(),
            user_type: UserType::Teacher,
            grade: None,
            class: None,
            photo: Vec::new(),
        }
    }

    #[test]
    fn test_teacher_lines_put_name_first() {
        let lines = profile_lines(&teacher());
        assert_eq!(
            lines,
            vec![
                ProfileLine::Name("이선생".to_string()),
                ProfileLine::Serial("선생님".to_string()),
            ]
        );
    }

    #[test]
    fn test_student_lines_put_serial_first() {
        let lines = profile_lines(&student());
        assert_eq!(
            lines,
            vec![
                ProfileLine::Serial("2학년 4반".to_string()),
                ProfileLine::Name("김디미".to_string()),
            ]
        );
    }

    #[test]
    fn test_student_without_class_shows_only_name() {
        let mut info = student();
        info.class = None;
        assert_eq!(profile_lines(&info), vec![ProfileLine::Name("김디미".to_string())]);
    }

    #[test]
    fn test_primary_photo_fallbacks() {
        assert_eq!(student().primary_photo(), Some("abc.jpg"));
        assert_eq!(teacher().primary_photo(), None);

        let mut blank = student();
        blank.photo = vec![String::new(), "later.jpg".to_string()];
        assert_eq!(blank.primary_photo(), None);

        // Only the empty string counts as "no photo"
        blank.photo = vec![" ".to_string()];
        assert_eq!(blank.primary_photo(), Some(" "));
    }

    #[test]
    fn test_grade_and_class_accept_strings() {
        let info: UserInfo = serde_json::from_str(
            r#"{"name":"김디미","userType":"S","grade":"1","class":" 5 "}"#,
        )
        .unwrap();
        assert_eq!((info.grade, info.class), (Some(1), Some(5)));
        assert_eq!(
            profile_lines(&info)[0],
            ProfileLine::Serial("1학년 5반".to_string())
        );

        // Unparseable values drop the serial line but keep the profile
        let info: UserInfo = serde_json::from_str(
            r#"{"name":"김디미","userType":"S","grade":"first","class":null}"#,
        )
        .unwrap();
        assert_eq!((info.grade, info.class), (None, None));
        assert_eq!(profile_lines(&info), vec![ProfileLine::Name("김디미".to_string())]);
    }

    #[test]
    fn test_photo_url() {
        assert_eq!(
            photo_url("https://api.example.com/", "abc.jpg"),
            "https://api.example.com/user_photo/abc.jpg"
        );
        assert_eq!(photo_url("", "abc.jpg"), "/user_photo/abc.jpg");
    }

    #[test]
    fn test_deserialize_session_payload() {
        let info: UserInfo = serde_json::from_str(
            r#"{"name":"이선생","userType":"T","photo":["t.png"]}"#,
        )
        .unwrap();
        assert!(info.is_teacher());
        assert_eq!(info.grade, None);

        // Unknown roles fall back to the student layout
        let info: UserInfo =
            serde_json::from_str(r#"{"name":"박졸업","userType":"D","grade":3,"class":1}"#)
                .unwrap();
        assert_eq!(info.user_type, UserType::Student);
        assert!(info.photo.is_empty());
    }
}
