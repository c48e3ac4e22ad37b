//! Built-in CLDR date data.
//!
//! Each entry carries the names, standard date formats, available skeleton
//! formats and interval formats the formatter reads. Interval formats are
//! keyed by skeleton, then by the greatest differing field (`G`, `y`, `M` or
//! `d`).

use crate::FormatLength;

/// Interval patterns of one skeleton, by greatest differing field.
pub(crate) type IntervalFormats = &'static [(char, &'static str)];

#[derive(Debug)]
pub(crate) struct LocaleData {
    pub(crate) tag:                  &'static str,
    pub(crate) months_wide:          [&'static str; 12],
    pub(crate) months_abbreviated:   [&'static str; 12],
    /// Sunday first
    pub(crate) weekdays_wide:        [&'static str; 7],
    pub(crate) weekdays_abbreviated: [&'static str; 7],
    /// Before and after year 1
    pub(crate) eras_abbreviated:     [&'static str; 2],
    pub(crate) eras_wide:            [&'static str; 2],
    /// Full, long, medium, short
    pub(crate) date_formats:         [&'static str; 4],
    pub(crate) skeletons:            &'static [(&'static str, &'static str)],
    pub(crate) interval_fallback:    &'static str,
    pub(crate) intervals:            &'static [(&'static str, IntervalFormats)],
}

impl LocaleData {
    pub(crate) const fn date_format(&self, length: FormatLength) -> &'static str {
        self.date_formats[length.index()]
    }

    /// Pattern for an exact skeleton key
    pub(crate) fn skeleton(&self, key: &str) -> Option<&'static str> {
        self.skeletons.iter().find(|(k, _)| *k == key).map(|(_, pattern)| *pattern)
    }

    pub(crate) fn skeleton_keys(&self) -> impl Iterator<Item = &'static str> {
        self.skeletons.iter().map(|(key, _)| *key)
    }

    pub(crate) fn interval_formats(&self, key: &str) -> Option<IntervalFormats> {
        self.intervals.iter().find(|(k, _)| *k == key).map(|(_, formats)| *formats)
    }

    pub(crate) fn interval_keys(&self) -> impl Iterator<Item = &'static str> {
        self.intervals.iter().map(|(key, _)| *key)
    }
}

/// Every built-in locale, most specific tags first.
pub(crate) static CATALOG: [&LocaleData; 5] = [&EN_GB, &EN, &DE, &FR, &ES];

pub(crate) fn find(tag: &str) -> Option<&'static LocaleData> {
    CATALOG.iter().copied().find(|data| data.tag == tag)
}

const EN_MONTHS: [&str; 12] = [
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

const EN_WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const EN_WEEKDAYS_ABBREVIATED: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(crate) static EN: LocaleData = LocaleData {
    tag:                  "en",
    months_wide:          EN_MONTHS,
    months_abbreviated:   [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays_wide:        EN_WEEKDAYS,
    weekdays_abbreviated: EN_WEEKDAYS_ABBREVIATED,
    eras_abbreviated:     ["BC", "AD"],
    eras_wide:            ["Before Christ", "Anno Domini"],
    date_formats:         ["EEEE, MMMM d, y", "MMMM d, y", "MMM d, y", "M/d/yy"],
    skeletons:            &[
        ("d", "d"),
        ("E", "ccc"),
        ("Ed", "d E"),
        ("Gy", "y G"),
        ("GyMMM", "MMM y G"),
        ("GyMMMd", "MMM d, y G"),
        ("GyMMMEd", "E, MMM d, y G"),
        ("M", "L"),
        ("Md", "M/d"),
        ("MEd", "E, M/d"),
        ("MMM", "LLL"),
        ("MMMd", "MMM d"),
        ("MMMEd", "E, MMM d"),
        ("MMMMd", "MMMM d"),
        ("y", "y"),
        ("yM", "M/y"),
        ("yMd", "M/d/y"),
        ("yMEd", "E, M/d/y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "MMM d, y"),
        ("yMMMEd", "E, MMM d, y"),
        ("yMMMM", "MMMM y"),
    ],
    interval_fallback:    "{0} – {1}",
    intervals:            &[
        ("d", &[('d', "d – d")]),
        ("Gy", &[('G', "y G – y G"), ('y', "y – y G")]),
        ("M", &[('M', "M – M")]),
        ("MMM", &[('M', "MMM – MMM")]),
        ("MMMd", &[('d', "MMM d – d"), ('M', "MMM d – MMM d")]),
        ("y", &[('y', "y – y")]),
        ("yM", &[('M', "M/y – M/y"), ('y', "M/y – M/y")]),
        ("yMd", &[('d', "M/d/y – M/d/y"), ('M', "M/d/y – M/d/y"), ('y', "M/d/y – M/d/y")]),
        ("yMMM", &[('M', "MMM – MMM y"), ('y', "MMM y – MMM y")]),
        ("yMMMd", &[('d', "MMM d – d, y"), ('M', "MMM d – MMM d, y"), ('y', "MMM d, y – MMM d, y")]),
        ("yMMMEd", &[
            ('d', "E, MMM d – E, MMM d, y"),
            ('M', "E, MMM d – E, MMM d, y"),
            ('y', "E, MMM d, y – E, MMM d, y"),
        ]),
        ("yMMMM", &[('M', "MMMM – MMMM y"), ('y', "MMMM y – MMMM y")]),
    ],
};

pub(crate) static EN_GB: LocaleData = LocaleData {
    tag:                  "en-GB",
    months_wide:          EN_MONTHS,
    months_abbreviated:   [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
    ],
    weekdays_wide:        EN_WEEKDAYS,
    weekdays_abbreviated: EN_WEEKDAYS_ABBREVIATED,
    eras_abbreviated:     ["BC", "AD"],
    eras_wide:            ["Before Christ", "Anno Domini"],
    date_formats:         ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
    skeletons:            &[
        ("d", "d"),
        ("E", "ccc"),
        ("Ed", "E d"),
        ("Gy", "y G"),
        ("GyMMMd", "d MMM y G"),
        ("M", "L"),
        ("Md", "dd/MM"),
        ("MMM", "LLL"),
        ("MMMd", "d MMM"),
        ("MMMMd", "d MMMM"),
        ("y", "y"),
        ("yM", "MM/y"),
        ("yMd", "dd/MM/y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "d MMM y"),
        ("yMMMEd", "E, d MMM y"),
        ("yMMMM", "MMMM y"),
    ],
    interval_fallback:    "{0} – {1}",
    intervals:            &[
        ("d", &[('d', "d–d")]),
        ("MMMd", &[('d', "d–d MMM"), ('M', "d MMM – d MMM")]),
        ("y", &[('y', "y–y")]),
        ("yM", &[('M', "MM/y – MM/y"), ('y', "MM/y – MM/y")]),
        ("yMd", &[
            ('d', "dd/MM/y – dd/MM/y"),
            ('M', "dd/MM/y – dd/MM/y"),
            ('y', "dd/MM/y – dd/MM/y"),
        ]),
        ("yMMM", &[('M', "MMM – MMM y"), ('y', "MMM y – MMM y")]),
        ("yMMMd", &[('d', "d–d MMM y"), ('M', "d MMM – d MMM y"), ('y', "d MMM y – d MMM y")]),
        ("yMMMEd", &[
            ('d', "E, d – E, d MMM y"),
            ('M', "E, d MMM – E, d MMM y"),
            ('y', "E, d MMM y – E, d MMM y"),
        ]),
        ("yMMMM", &[('M', "MMMM – MMMM y"), ('y', "MMMM y – MMMM y")]),
    ],
};

pub(crate) static DE: LocaleData = LocaleData {
    tag:                  "de",
    months_wide:          [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    months_abbreviated:   [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
    ],
    weekdays_wide:        ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
    weekdays_abbreviated: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    eras_abbreviated:     ["v. Chr.", "n. Chr."],
    eras_wide:            ["v. Chr.", "n. Chr."],
    date_formats:         ["EEEE, d. MMMM y", "d. MMMM y", "dd.MM.y", "dd.MM.yy"],
    skeletons:            &[
        ("d", "d"),
        ("E", "ccc"),
        ("Ed", "E, d."),
        ("Gy", "y G"),
        ("M", "L"),
        ("Md", "d.M."),
        ("MMM", "LLL"),
        ("MMMd", "d. MMM"),
        ("MMMMd", "d. MMMM"),
        ("y", "y"),
        ("yM", "M/y"),
        ("yMd", "d.M.y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "d. MMM y"),
        ("yMMMEd", "E, d. MMM y"),
        ("yMMMM", "MMMM y"),
    ],
    interval_fallback:    "{0} – {1}",
    intervals:            &[
        ("d", &[('d', "d.–d.")]),
        ("MMMd", &[('d', "d.–d. MMM"), ('M', "d. MMM – d. MMM")]),
        ("y", &[('y', "y–y")]),
        ("yM", &[('M', "MM/y – MM/y"), ('y', "MM/y – MM/y")]),
        ("yMd", &[
            ('d', "dd.–dd.MM.y"),
            ('M', "dd.MM. – dd.MM.y"),
            ('y', "dd.MM.y – dd.MM.y"),
        ]),
        ("yMMM", &[('M', "MMM–MMM y"), ('y', "MMM y – MMM y")]),
        ("yMMMd", &[
            ('d', "d.–d. MMM y"),
            ('M', "d. MMM – d. MMM y"),
            ('y', "d. MMM y – d. MMM y"),
        ]),
        ("yMMMEd", &[
            ('d', "E, d. – E, d. MMM y"),
            ('M', "E, d. MMM – E, d. MMM y"),
            ('y', "E, d. MMM y – E, d. MMM y"),
        ]),
        ("yMMMM", &[('M', "MMMM–MMMM y"), ('y', "MMMM y – MMMM y")]),
    ],
};

pub(crate) static FR: LocaleData = LocaleData {
    tag:                  "fr",
    months_wide:          [
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
    ],
    months_abbreviated:   [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
    ],
    weekdays_wide:        ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
    weekdays_abbreviated: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    eras_abbreviated:     ["av. J.-C.", "ap. J.-C."],
    eras_wide:            ["avant Jésus-Christ", "après Jésus-Christ"],
    date_formats:         ["EEEE d MMMM y", "d MMMM y", "d MMM y", "dd/MM/y"],
    skeletons:            &[
        ("d", "d"),
        ("E", "E"),
        ("Ed", "E d"),
        ("Gy", "y G"),
        ("M", "L"),
        ("Md", "dd/MM"),
        ("MMM", "LLL"),
        ("MMMd", "d MMM"),
        ("MMMMd", "d MMMM"),
        ("y", "y"),
        ("yM", "MM/y"),
        ("yMd", "dd/MM/y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "d MMM y"),
        ("yMMMEd", "E d MMM y"),
        ("yMMMM", "MMMM y"),
    ],
    interval_fallback:    "{0} – {1}",
    intervals:            &[
        ("d", &[('d', "d–d")]),
        ("MMMd", &[('d', "d–d MMM"), ('M', "d MMM – d MMM")]),
        ("y", &[('y', "y – y")]),
        ("yM", &[('M', "MM/y – MM/y"), ('y', "MM/y – MM/y")]),
        ("yMd", &[
            ('d', "dd/MM/y – dd/MM/y"),
            ('M', "dd/MM/y – dd/MM/y"),
            ('y', "dd/MM/y – dd/MM/y"),
        ]),
        ("yMMM", &[('M', "MMM–MMM y"), ('y', "MMM y – MMM y")]),
        ("yMMMd", &[('d', "d–d MMM y"), ('M', "d MMM – d MMM y"), ('y', "d MMM y – d MMM y")]),
        ("yMMMEd", &[
            ('d', "E d – E d MMM y"),
            ('M', "E d MMM – E d MMM y"),
            ('y', "E d MMM y – E d MMM y"),
        ]),
        ("yMMMM", &[('M', "MMMM–MMMM y"), ('y', "MMMM y – MMMM y")]),
    ],
};

pub(crate) static ES: LocaleData = LocaleData {
    tag:                  "es",
    months_wide:          [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    months_abbreviated:   [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays_wide:        ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
    weekdays_abbreviated: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    eras_abbreviated:     ["a. C.", "d. C."],
    eras_wide:            ["antes de Cristo", "después de Cristo"],
    date_formats:         ["EEEE, d 'de' MMMM 'de' y", "d 'de' MMMM 'de' y", "d MMM y", "d/M/yy"],
    skeletons:            &[
        ("d", "d"),
        ("E", "ccc"),
        ("Ed", "E d"),
        ("Gy", "y G"),
        ("M", "L"),
        ("Md", "d/M"),
        ("MMM", "LLL"),
        ("MMMd", "d MMM"),
        ("MMMMd", "d 'de' MMMM"),
        ("y", "y"),
        ("yM", "M/y"),
        ("yMd", "d/M/y"),
        ("yMMM", "MMM y"),
        ("yMMMd", "d MMM y"),
        ("yMMMEd", "EEE, d MMM y"),
        ("yMMMM", "MMMM 'de' y"),
        ("yMMMMd", "d 'de' MMMM 'de' y"),
        ("yMMMMEEEEd", "EEEE, d 'de' MMMM 'de' y"),
    ],
    interval_fallback:    "{0}–{1}",
    intervals:            &[
        ("d", &[('d', "d–d")]),
        ("MMMd", &[('d', "d–d MMM"), ('M', "d MMM–d MMM")]),
        ("y", &[('y', "y–y")]),
        ("yM", &[('M', "M/y–M/y"), ('y', "M/y–M/y")]),
        ("yMd", &[('d', "d/M/y–d/M/y"), ('M', "d/M/y–d/M/y"), ('y', "d/M/y–d/M/y")]),
        ("yMMM", &[('M', "MMM–MMM y"), ('y', "MMM y–MMM y")]),
        ("yMMMd", &[('d', "d–d MMM y"), ('M', "d MMM–d MMM y"), ('y', "d MMM y–d MMM y")]),
        ("yMMMEd", &[
            ('d', "E, d MMM–E, d MMM y"),
            ('M', "E, d MMM–E, d MMM y"),
            ('y', "E, d MMM y–E, d MMM y"),
        ]),
        ("yMMMM", &[('M', "MMMM–MMMM 'de' y"), ('y', "MMMM 'de' y–MMMM 'de' y")]),
    ],
};
