//! Supported currencies and the country whose flag represents each one.
//!
//! Shared-currency zones use a single representative country (EUR shows the
//! French flag, XCD the flag of Antigua and Barbuda).

/// A supported currency and the country code used for its flag icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub country: &'static str,
}

const fn c(code: &'static str, country: &'static str) -> Currency {
    Currency { code, country }
}

/// Sorted ascending by currency code
static CURRENCIES: &[Currency] = &[
    c("AED", "AE"),
    c("AFN", "AF"),
    c("ALL", "AL"),
    c("AMD", "AM"),
    c("ANG", "AN"),
    c("AOA", "AO"),
    c("ARS", "AR"),
    c("AUD", "AU"),
    c("AZN", "AZ"),
    c("BDT", "BD"),
    c("BGN", "BG"),
    c("BHD", "BH"),
    c("BMD", "BM"),
    c("BRL", "BR"),
    c("CAD", "CA"),
    c("CHF", "CH"),
    c("CLP", "CL"),
    c("CNY", "CN"),
    c("COP", "CO"),
    c("CZK", "CZ"),
    c("DKK", "DK"),
    c("DZD", "DZ"),
    c("EGP", "EG"),
    c("EUR", "FR"),
    c("GBP", "GB"),
    c("HKD", "HK"),
    c("HUF", "HU"),
    c("IDR", "ID"),
    c("ILS", "IL"),
    c("INR", "IN"),
    c("JPY", "JP"),
    c("KRW", "KR"),
    c("KWD", "KW"),
    c("LKR", "LK"),
    c("MXN", "MX"),
    c("MYR", "MY"),
    c("NOK", "NO"),
    c("NZD", "NZ"),
    c("OMR", "OM"),
    c("PHP", "PH"),
    c("PKR", "PK"),
    c("PLN", "PL"),
    c("QAR", "QA"),
    c("RUB", "RU"),
    c("SAR", "SA"),
    c("SEK", "SE"),
    c("SGD", "SG"),
    c("THB", "TH"),
    c("TRY", "TR"),
    c("TWD", "TW"),
    c("USD", "US"),
    c("XCD", "AG"),
    c("ZAR", "ZA"),
];

/// All supported currencies in selector order
pub fn all() -> &'static [Currency] {
    CURRENCIES
}

/// Look up a currency by its three-letter code
pub fn find(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &CURRENCIES[idx])
}

pub fn contains(code: &str) -> bool {
    find(code).is_some()
}

/// Flag image URL for a currency, `None` when the code is not in the catalog
pub fn flag_url(base_url: &str, code: &str) -> Option<String> {
    find(code).map(|entry| {
        format!("{}/{}/flat/32.png", base_url.trim_end_matches('/'), entry.country)
    })
}
