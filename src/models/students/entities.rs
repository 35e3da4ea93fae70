use serde::{Deserialize, Serialize};

// 学年（作业可见性由此决定：学生只能看到与自己学年一致的作业）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentYear {
    First,  // 一年级
    Second, // 二年级
    Third,  // 三年级
    Fourth, // 四年级
}

impl StudentYear {
    pub const FIRST: &'static str = "1st";
    pub const SECOND: &'static str = "2nd";
    pub const THIRD: &'static str = "3rd";
    pub const FOURTH: &'static str = "4th";

    pub fn all_years() -> &'static [StudentYear] {
        &[Self::First, Self::Second, Self::Third, Self::Fourth]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StudentYear::First => Self::FIRST,
            StudentYear::Second => Self::SECOND,
            StudentYear::Third => Self::THIRD,
            StudentYear::Fourth => Self::FOURTH,
        }
    }
}

// 学年在线上始终以 "1st".."4th" 传输
impl Serialize for StudentYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StudentYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的学年: '{s}'. 支持的学年: 1st, 2nd, 3rd, 4th"
            ))
        })
    }
}

impl std::fmt::Display for StudentYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StudentYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            StudentYear::FIRST => Ok(StudentYear::First),
            StudentYear::SECOND => Ok(StudentYear::Second),
            StudentYear::THIRD => Ok(StudentYear::Third),
            StudentYear::FOURTH => Ok(StudentYear::Fourth),
            _ => Err(format!("Invalid student year: {s}")),
        }
    }
}

// 学生实体（数据服务的学生档案）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    // 唯一 ID
    #[serde(rename = "_id", default)]
    pub id: String,
    // 学生姓名
    pub name: String,
    // 邮箱
    #[serde(default)]
    pub email: String,
    // 学年
    pub year: StudentYear,
}
