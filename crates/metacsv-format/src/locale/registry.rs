/// Calendar names used when a date pattern asks for textual fields (`MMM`, `EEEE`, `a`).
///
/// Weekday arrays start on Monday, matching `chrono::Weekday::num_days_from_monday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale {
    pub id: &'static str,
    pub months: [&'static str; 12],
    pub short_months: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub short_weekdays: [&'static str; 7],
    pub am: &'static str,
    pub pm: &'static str,
}

const ENGLISH: DateLocale = DateLocale {
    id: "en_US",
    months: [
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
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    short_weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    am: "AM",
    pm: "PM",
};

pub static EN_US: DateLocale = ENGLISH;

/// British English shares month and weekday names with `en_US`.
pub static EN_GB: DateLocale = DateLocale {
    id: "en_GB",
    am: "am",
    pm: "pm",
    ..ENGLISH
};

pub static FR_FR: DateLocale = DateLocale {
    id: "fr_FR",
    months: [
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
    short_months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    weekdays: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    short_weekdays: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
    am: "AM",
    pm: "PM",
};

pub static DE_DE: DateLocale = DateLocale {
    id: "de_DE",
    months: [
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
    short_months: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    short_weekdays: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
    am: "AM",
    pm: "PM",
};

pub static ES_ES: DateLocale = DateLocale {
    id: "es_ES",
    months: [
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
    short_months: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays: [
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
        "domingo",
    ],
    short_weekdays: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    am: "a. m.",
    pm: "p. m.",
};

pub static IT_IT: DateLocale = DateLocale {
    id: "it_IT",
    months: [
        "gennaio",
        "febbraio",
        "marzo",
        "aprile",
        "maggio",
        "giugno",
        "luglio",
        "agosto",
        "settembre",
        "ottobre",
        "novembre",
        "dicembre",
    ],
    short_months: [
        "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    ],
    weekdays: [
        "lunedì",
        "martedì",
        "mercoledì",
        "giovedì",
        "venerdì",
        "sabato",
        "domenica",
    ],
    short_weekdays: ["lun", "mar", "mer", "gio", "ven", "sab", "dom"],
    am: "AM",
    pm: "PM",
};

pub static NL_NL: DateLocale = DateLocale {
    id: "nl_NL",
    months: [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ],
    short_months: [
        "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
    ],
    weekdays: [
        "maandag",
        "dinsdag",
        "woensdag",
        "donderdag",
        "vrijdag",
        "zaterdag",
        "zondag",
    ],
    short_weekdays: ["ma", "di", "wo", "do", "vr", "za", "zo"],
    am: "a.m.",
    pm: "p.m.",
};

const PORTUGUESE: DateLocale = DateLocale {
    id: "pt_PT",
    months: [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
    short_months: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
    weekdays: [
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
        "domingo",
    ],
    short_weekdays: ["seg", "ter", "qua", "qui", "sex", "sáb", "dom"],
    am: "da manhã",
    pm: "da tarde",
};

pub static PT_PT: DateLocale = PORTUGUESE;

/// Brazilian Portuguese shares calendar names with `pt_PT`.
pub static PT_BR: DateLocale = DateLocale {
    id: "pt_BR",
    am: "AM",
    pm: "PM",
    ..PORTUGUESE
};

/// Normalize a locale tag to the canonical `ll_RR` id of a built-in locale.
///
/// Accepts `-` and `_` interchangeably, matches case-insensitively, drops POSIX encoding/modifier
/// suffixes (`fr_FR.UTF-8`, `de_DE@euro`) and BCP-47 extensions, and falls back to the language
/// part for regions we don't list (`fr-CA` -> `fr_FR`).
pub fn normalize_locale_id(id: &str) -> Option<&'static str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut key = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        let ch = match ch {
            '_' => '-',
            other => other,
        };
        key.push(ch.to_ascii_lowercase());
    }

    if let Some(idx) = key.find('.') {
        key.truncate(idx);
    }
    if let Some(idx) = key.find('@') {
        key.truncate(idx);
    }
    if let Some(idx) = key.find("-u-") {
        key.truncate(idx);
    }
    if let Some(idx) = key.find("-x-") {
        key.truncate(idx);
    }

    match key.as_str() {
        "en-us" | "en" => Some("en_US"),
        "en-gb" | "en-uk" => Some("en_GB"),
        "fr-fr" | "fr" => Some("fr_FR"),
        "de-de" | "de" => Some("de_DE"),
        "es-es" | "es" => Some("es_ES"),
        "it-it" | "it" => Some("it_IT"),
        "nl-nl" | "nl" => Some("nl_NL"),
        "pt-pt" | "pt" => Some("pt_PT"),
        "pt-br" => Some("pt_BR"),
        _ => {
            let lang = key.split('-').next().unwrap_or("");
            match lang {
                "en" => Some("en_US"),
                "fr" => Some("fr_FR"),
                "de" => Some("de_DE"),
                "es" => Some("es_ES"),
                "it" => Some("it_IT"),
                "nl" => Some("nl_NL"),
                "pt" => Some("pt_PT"),
                _ => None,
            }
        }
    }
}

pub fn get_locale(id: &str) -> Option<&'static DateLocale> {
    match normalize_locale_id(id)? {
        "en_US" => Some(&EN_US),
        "en_GB" => Some(&EN_GB),
        "fr_FR" => Some(&FR_FR),
        "de_DE" => Some(&DE_DE),
        "es_ES" => Some(&ES_ES),
        "it_IT" => Some(&IT_IT),
        "nl_NL" => Some(&NL_NL),
        "pt_PT" => Some(&PT_PT),
        "pt_BR" => Some(&PT_BR),
        _ => None,
    }
}
