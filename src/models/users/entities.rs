use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl Default for UserRole {
    // 未指定角色时默认为学生
    fn default() -> Self {
        UserRole::Student
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STUDENT => Ok(UserRole::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: admin, teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 班级分组
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum Section {
    EinsteinG11, // Einstein 组（11 年级）
    GalileiG12,  // Galilei 组（12 年级）
    None,        // 无分组（管理员）
}

impl Section {
    pub const EINSTEIN_G11: &'static str = "einstein_g11";
    pub const GALILEI_G12: &'static str = "galilei_g12";
    pub const NONE: &'static str = "none";

    /// 真实存在的班级分组（不含 None）
    pub fn cohorts() -> &'static [Section] {
        &[Section::EinsteinG11, Section::GalileiG12]
    }

    /// 展示名称
    pub fn label(&self) -> &'static str {
        match self {
            Section::EinsteinG11 => "Einstein (G11)",
            Section::GalileiG12 => "Galilei (G12)",
            Section::None => "None",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::None
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Section::EINSTEIN_G11 => Ok(Section::EinsteinG11),
            Section::GALILEI_G12 => Ok(Section::GalileiG12),
            Section::NONE => Ok(Section::None),
            _ => Err(serde::de::Error::custom(format!(
                "无效的班级分组: '{s}'. 支持的分组: einstein_g11, galilei_g12, none"
            ))),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::EinsteinG11 => write!(f, "{}", Section::EINSTEIN_G11),
            Section::GalileiG12 => write!(f, "{}", Section::GALILEI_G12),
            Section::None => write!(f, "{}", Section::NONE),
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "einstein_g11" => Ok(Section::EinsteinG11),
            "galilei_g12" => Ok(Section::GalileiG12),
            "none" => Ok(Section::None),
            _ => Err(format!("Invalid section: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    // 唯一 ID（不透明字符串）
    pub id: String,
    // 登录用户名
    pub username: String,
    // 密码（明文存储，兼容历史客户端数据）
    pub password: String,
    // 展示姓名（登录以此匹配）
    pub name: String,
    // 角色
    pub role: UserRole,
    // 班级分组（管理员为 none）
    pub section: Section,
    // 任教科目（仅教师有意义）
    pub subject: Option<String>,
}
