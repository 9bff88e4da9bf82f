use super::CurrencyRow;

/// Ids match the lowercase ISO 4217 codes used by the rate feed
#[rustfmt::skip]
pub(crate) const CURRENCIES: &[CurrencyRow] = &[
    ("usd", "United States dollar", "USD"),
    ("eur", "Euro",                 "EUR"),
    ("gbp", "Pound sterling",       "GBP"),
    ("jpy", "Japanese yen",         "JPY"),
    ("chf", "Swiss franc",          "CHF"),
    ("cny", "Chinese yuan",         "CNY"),
    ("inr", "Indian rupee",         "INR"),
    ("cad", "Canadian dollar",      "CAD"),
    ("aud", "Australian dollar",    "AUD"),
    ("brl", "Brazilian real",       "BRL"),
    ("krw", "South Korean won",     "KRW"),
    ("sek", "Swedish krona",        "SEK"),
    ("nok", "Norwegian krone",      "NOK"),
    ("pln", "Polish złoty",         "PLN"),
    ("try", "Turkish lira",         "TRY"),
    ("uah", "Ukrainian hryvnia",    "UAH"),
];
