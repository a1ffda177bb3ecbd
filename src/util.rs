//! Utility functions for medina

use crate::i18n::Locale;

const WORDS_PER_MINUTE: usize = 200;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Estimates reading time in minutes for a post body.
///
/// Uses a 200 words-per-minute pace, rounded up, with a one minute
/// floor so even the shortest post shows a sensible label.
///
/// # Arguments
///
/// * `body`: Raw markdown post body
///
/// # Returns
///
/// Reading time in whole minutes, at least 1
pub fn reading_time(body: &str) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Formats an ISO date (`YYYY-MM-DD` prefix) as a long-form date.
///
/// English renders "November 2, 2025", French "2 novembre 2025",
/// Arabic uses Arabic month names with the French ordering. Dates that
/// do not parse pass through verbatim rather than failing the page.
///
/// # Arguments
///
/// * `iso`: Date string, `YYYY-MM-DD` optionally followed by a time part
/// * `locale`: Target locale for month names and field order
///
/// # Returns
///
/// Localized date string, or the input unchanged when unparseable
pub fn format_date(iso: &str, locale: Locale) -> String {
    let Some((year, month, day)) = parse_iso_date(iso) else {
        return iso.to_string();
    };

    match locale {
        Locale::En => format!("{} {}, {}", MONTHS_EN[month - 1], day, year),
        Locale::Fr => format!("{} {} {}", day, MONTHS_FR[month - 1], year),
        Locale::Ar => format!("{} {} {}", day, MONTHS_AR[month - 1], year),
    }
}

/// Parses the `YYYY-MM-DD` prefix of a date string.
fn parse_iso_date(iso: &str) -> Option<(u16, usize, u8)> {
    let date_part = iso.get(..10)?;
    let mut parts = date_part.split('-');

    let year: u16 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some((year, month, day))
}
