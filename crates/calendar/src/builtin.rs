//! Built-in calendar table for academic year 2025.

use crate::date::ymd;
use crate::error::CalendarError;
use crate::period::{SemesterPeriod, VacationEntry};
use crate::table::CalendarTable;

/// Academic year of the built-in table.
pub const BUILTIN_YEAR: i32 = 2025;

/// Returns the built-in calendar table for academic year 2025.
///
/// The academic year runs from April 2025 to March 2026 in four quarters.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] only if a date literal below is
/// malformed.
pub fn academic_year_2025() -> Result<CalendarTable, CalendarError> {
    let y = BUILTIN_YEAR;
    let next = y + 1;

    let semesters = vec![
        SemesterPeriod::new("1学期", ymd(y, 4, 16)?, ymd(y, 6, 10)?),
        SemesterPeriod::new("2学期", ymd(y, 6, 13)?, ymd(y, 7, 31)?),
        SemesterPeriod::new("3学期", ymd(y, 9, 19)?, ymd(y, 11, 10)?),
        SemesterPeriod::new("4学期", ymd(y, 11, 18)?, ymd(next, 1, 26)?),
    ];

    let vacations = vec![
        // 1学期
        VacationEntry::range("春休み", ymd(y, 4, 1)?, ymd(y, 4, 15)?),
        VacationEntry::single("昭和の日（4/29）の振替休講日", ymd(y, 5, 1)?),
        VacationEntry::single("海の日（7/21）の振替休講日", ymd(y, 5, 2)?),
        VacationEntry::single("憲法記念日", ymd(y, 5, 3)?),
        VacationEntry::single("みどりの日", ymd(y, 5, 4)?),
        VacationEntry::single("こどもの日", ymd(y, 5, 5)?),
        VacationEntry::single("振替休日", ymd(y, 5, 6)?),
        VacationEntry::single("創立記念日（同慶節）", ymd(y, 5, 21)?),
        VacationEntry::range("試験・補講", ymd(y, 6, 11)?, ymd(y, 6, 12)?),
        // 2学期
        VacationEntry::range("試験・補講", ymd(y, 8, 1)?, ymd(y, 8, 2)?),
        VacationEntry::range("夏休み", ymd(y, 8, 4)?, ymd(y, 9, 18)?),
        // 3学期
        VacationEntry::single("摩耶祭準備", ymd(y, 10, 10)?),
        VacationEntry::single("スポーツの日・摩耶祭片付け", ymd(y, 10, 13)?),
        VacationEntry::range("試験・補講", ymd(y, 11, 11)?, ymd(y, 11, 13)?),
        VacationEntry::single("黎明祭準備", ymd(y, 11, 14)?),
        VacationEntry::single("黎明祭片付け", ymd(y, 11, 17)?),
        // 4学期
        VacationEntry::single("授業回調整（休講日）", ymd(y, 12, 23)?),
        VacationEntry::single("秋分の日（9/23）の振替休講日", ymd(y, 12, 24)?),
        VacationEntry::single("文化の日（11/3）の振替休講日", ymd(y, 12, 25)?),
        VacationEntry::single("振替休日（11/24）の振替休講日", ymd(y, 12, 26)?),
        VacationEntry::range("冬休み", ymd(y, 12, 29)?, ymd(next, 1, 5)?),
        VacationEntry::single("成人の日", ymd(next, 1, 12)?),
        VacationEntry::single("授業回調整（休講日）", ymd(next, 1, 13)?),
        VacationEntry::single("大学入学共通テスト準備（休講日）", ymd(next, 1, 16)?),
        VacationEntry::single("試験・補講", ymd(next, 1, 21)?),
        VacationEntry::single("試験・補講", ymd(next, 1, 22)?),
        VacationEntry::single("試験・補講", ymd(next, 1, 27)?),
        VacationEntry::range("春休み", ymd(next, 1, 28)?, ymd(next, 3, 31)?),
    ];

    Ok(CalendarTable::new(y, semesters, vacations))
}
