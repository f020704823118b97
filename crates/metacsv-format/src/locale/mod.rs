mod registry;

pub use registry::{
    get_locale, normalize_locale_id, DateLocale, DE_DE, EN_GB, EN_US, ES_ES, FR_FR, IT_IT, NL_NL,
    PT_BR, PT_PT,
};
