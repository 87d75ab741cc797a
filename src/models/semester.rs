use std::fmt;
use std::path::PathBuf;

/// 学期排序优先级，未知季节排在最后
static SEASON_ORDER: phf::Map<&'static str, u8> = phf::phf_map! {
    "winter" => 0,
    "spring" => 1,
    "fall" => 2,
};

/// 未识别季节的排序值
const UNKNOWN_SEASON_RANK: u8 = 3;

/// 获取季节的排序值
pub fn season_rank(season: &str) -> u8 {
    SEASON_ORDER
        .get(season)
        .copied()
        .unwrap_or(UNKNOWN_SEASON_RANK)
}

/// 学期文件夹，例如 `Quizzes-Fall-2021`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterFolder {
    /// 季节（小写），例如 `fall`
    pub season: String,
    /// 四位年份
    pub year: String,
    /// 文件夹路径
    pub path: PathBuf,
}

impl SemesterFolder {
    pub fn new(season: impl Into<String>, year: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            season: season.into(),
            year: year.into(),
            path: path.into(),
        }
    }

    /// 排序键：先按年份，再按季节优先级
    pub fn sort_key(&self) -> (&str, u8) {
        (self.year.as_str(), season_rank(&self.season))
    }
}

impl fmt::Display for SemesterFolder {
    /// 首字母大写的季节加年份，例如 `Fall 2021`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.season.chars();
        match chars.next() {
            Some(first) => write!(
                f,
                "{}{} {}",
                first.to_uppercase(),
                chars.as_str(),
                self.year
            ),
            None => write!(f, "{}", self.year),
        }
    }
}

/// 按年份、季节排序学期文件夹
pub fn sort_semesters(semesters: &mut [SemesterFolder]) {
    semesters.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
