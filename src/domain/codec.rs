//! ISO 3166 country and ISO 639 language code conversion for locales.

use super::{CallError, Locale};

/// Reversible conversion between two representations.
pub trait Codec<A, B> {
    /// Convert `input` into the target representation.
    fn encode(&self, input: &A) -> Result<B, CallError>;

    /// Convert `input` back into the source representation.
    fn decode(&self, input: &B) -> Result<A, CallError>;

    /// The same codec with encode and decode swapped.
    fn inverse(self) -> Inverse<Self>
    where
        Self: Sized,
    {
        Inverse(self)
    }
}

/// Codec running another codec backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inverse<C>(C);

impl<A, B, C: Codec<A, B>> Codec<B, A> for Inverse<C> {
    fn encode(&self, input: &B) -> Result<A, CallError> {
        self.0.decode(input)
    }

    fn decode(&self, input: &A) -> Result<B, CallError> {
        self.0.encode(input)
    }
}

/// ISO 3166-1 alpha-2 to alpha-3 country codes.
const COUNTRIES: &[(&str, &str)] = &[
    ("AD", "AND"), ("AE", "ARE"), ("AF", "AFG"), ("AG", "ATG"), ("AI", "AIA"), ("AL", "ALB"),
    ("AM", "ARM"), ("AO", "AGO"), ("AQ", "ATA"), ("AR", "ARG"), ("AS", "ASM"), ("AT", "AUT"),
    ("AU", "AUS"), ("AW", "ABW"), ("AX", "ALA"), ("AZ", "AZE"),
    ("BA", "BIH"), ("BB", "BRB"), ("BD", "BGD"), ("BE", "BEL"), ("BF", "BFA"), ("BG", "BGR"),
    ("BH", "BHR"), ("BI", "BDI"), ("BJ", "BEN"), ("BL", "BLM"), ("BM", "BMU"), ("BN", "BRN"),
    ("BO", "BOL"), ("BQ", "BES"), ("BR", "BRA"), ("BS", "BHS"), ("BT", "BTN"), ("BV", "BVT"),
    ("BW", "BWA"), ("BY", "BLR"), ("BZ", "BLZ"),
    ("CA", "CAN"), ("CC", "CCK"), ("CD", "COD"), ("CF", "CAF"), ("CG", "COG"), ("CH", "CHE"),
    ("CI", "CIV"), ("CK", "COK"), ("CL", "CHL"), ("CM", "CMR"), ("CN", "CHN"), ("CO", "COL"),
    ("CR", "CRI"), ("CU", "CUB"), ("CV", "CPV"), ("CW", "CUW"), ("CX", "CXR"), ("CY", "CYP"),
    ("CZ", "CZE"),
    ("DE", "DEU"), ("DJ", "DJI"), ("DK", "DNK"), ("DM", "DMA"), ("DO", "DOM"), ("DZ", "DZA"),
    ("EC", "ECU"), ("EE", "EST"), ("EG", "EGY"), ("EH", "ESH"), ("ER", "ERI"), ("ES", "ESP"),
    ("ET", "ETH"),
    ("FI", "FIN"), ("FJ", "FJI"), ("FK", "FLK"), ("FM", "FSM"), ("FO", "FRO"), ("FR", "FRA"),
    ("GA", "GAB"), ("GB", "GBR"), ("GD", "GRD"), ("GE", "GEO"), ("GF", "GUF"), ("GG", "GGY"),
    ("GH", "GHA"), ("GI", "GIB"), ("GL", "GRL"), ("GM", "GMB"), ("GN", "GIN"), ("GP", "GLP"),
    ("GQ", "GNQ"), ("GR", "GRC"), ("GS", "SGS"), ("GT", "GTM"), ("GU", "GUM"), ("GW", "GNB"),
    ("GY", "GUY"),
    ("HK", "HKG"), ("HM", "HMD"), ("HN", "HND"), ("HR", "HRV"), ("HT", "HTI"), ("HU", "HUN"),
    ("ID", "IDN"), ("IE", "IRL"), ("IL", "ISR"), ("IM", "IMN"), ("IN", "IND"), ("IO", "IOT"),
    ("IQ", "IRQ"), ("IR", "IRN"), ("IS", "ISL"), ("IT", "ITA"),
    ("JE", "JEY"), ("JM", "JAM"), ("JO", "JOR"), ("JP", "JPN"),
    ("KE", "KEN"), ("KG", "KGZ"), ("KH", "KHM"), ("KI", "KIR"), ("KM", "COM"), ("KN", "KNA"),
    ("KP", "PRK"), ("KR", "KOR"), ("KW", "KWT"), ("KY", "CYM"), ("KZ", "KAZ"),
    ("LA", "LAO"), ("LB", "LBN"), ("LC", "LCA"), ("LI", "LIE"), ("LK", "LKA"), ("LR", "LBR"),
    ("LS", "LSO"), ("LT", "LTU"), ("LU", "LUX"), ("LV", "LVA"), ("LY", "LBY"),
    ("MA", "MAR"), ("MC", "MCO"), ("MD", "MDA"), ("ME", "MNE"), ("MF", "MAF"), ("MG", "MDG"),
    ("MH", "MHL"), ("MK", "MKD"), ("ML", "MLI"), ("MM", "MMR"), ("MN", "MNG"), ("MO", "MAC"),
    ("MP", "MNP"), ("MQ", "MTQ"), ("MR", "MRT"), ("MS", "MSR"), ("MT", "MLT"), ("MU", "MUS"),
    ("MV", "MDV"), ("MW", "MWI"), ("MX", "MEX"), ("MY", "MYS"), ("MZ", "MOZ"),
    ("NA", "NAM"), ("NC", "NCL"), ("NE", "NER"), ("NF", "NFK"), ("NG", "NGA"), ("NI", "NIC"),
    ("NL", "NLD"), ("NO", "NOR"), ("NP", "NPL"), ("NR", "NRU"), ("NU", "NIU"), ("NZ", "NZL"),
    ("OM", "OMN"),
    ("PA", "PAN"), ("PE", "PER"), ("PF", "PYF"), ("PG", "PNG"), ("PH", "PHL"), ("PK", "PAK"),
    ("PL", "POL"), ("PM", "SPM"), ("PN", "PCN"), ("PR", "PRI"), ("PS", "PSE"), ("PT", "PRT"),
    ("PW", "PLW"), ("PY", "PRY"),
    ("QA", "QAT"),
    ("RE", "REU"), ("RO", "ROU"), ("RS", "SRB"), ("RU", "RUS"), ("RW", "RWA"),
    ("SA", "SAU"), ("SB", "SLB"), ("SC", "SYC"), ("SD", "SDN"), ("SE", "SWE"), ("SG", "SGP"),
    ("SH", "SHN"), ("SI", "SVN"), ("SJ", "SJM"), ("SK", "SVK"), ("SL", "SLE"), ("SM", "SMR"),
    ("SN", "SEN"), ("SO", "SOM"), ("SR", "SUR"), ("SS", "SSD"), ("ST", "STP"), ("SV", "SLV"),
    ("SX", "SXM"), ("SY", "SYR"), ("SZ", "SWZ"),
    ("TC", "TCA"), ("TD", "TCD"), ("TF", "ATF"), ("TG", "TGO"), ("TH", "THA"), ("TJ", "TJK"),
    ("TK", "TKL"), ("TL", "TLS"), ("TM", "TKM"), ("TN", "TUN"), ("TO", "TON"), ("TR", "TUR"),
    ("TT", "TTO"), ("TV", "TUV"), ("TW", "TWN"), ("TZ", "TZA"),
    ("UA", "UKR"), ("UG", "UGA"), ("UM", "UMI"), ("US", "USA"), ("UY", "URY"), ("UZ", "UZB"),
    ("VA", "VAT"), ("VC", "VCT"), ("VE", "VEN"), ("VG", "VGB"), ("VI", "VIR"), ("VN", "VNM"),
    ("VU", "VUT"),
    ("WF", "WLF"), ("WS", "WSM"),
    ("YE", "YEM"), ("YT", "MYT"),
    ("ZA", "ZAF"), ("ZM", "ZMB"), ("ZW", "ZWE"),
];

/// ISO 639-1 to ISO 639-2/T language codes.
const LANGUAGES: &[(&str, &str)] = &[
    ("aa", "aar"), ("ab", "abk"), ("ae", "ave"), ("af", "afr"), ("ak", "aka"), ("am", "amh"),
    ("an", "arg"), ("ar", "ara"), ("as", "asm"), ("av", "ava"), ("ay", "aym"), ("az", "aze"),
    ("ba", "bak"), ("be", "bel"), ("bg", "bul"), ("bi", "bis"), ("bm", "bam"), ("bn", "ben"),
    ("bo", "bod"), ("br", "bre"), ("bs", "bos"),
    ("ca", "cat"), ("ce", "che"), ("ch", "cha"), ("co", "cos"), ("cr", "cre"), ("cs", "ces"),
    ("cu", "chu"), ("cv", "chv"), ("cy", "cym"),
    ("da", "dan"), ("de", "deu"), ("dv", "div"), ("dz", "dzo"),
    ("ee", "ewe"), ("el", "ell"), ("en", "eng"), ("eo", "epo"), ("es", "spa"), ("et", "est"),
    ("eu", "eus"),
    ("fa", "fas"), ("ff", "ful"), ("fi", "fin"), ("fj", "fij"), ("fo", "fao"), ("fr", "fra"),
    ("fy", "fry"),
    ("ga", "gle"), ("gd", "gla"), ("gl", "glg"), ("gn", "grn"), ("gu", "guj"), ("gv", "glv"),
    ("ha", "hau"), ("he", "heb"), ("hi", "hin"), ("ho", "hmo"), ("hr", "hrv"), ("ht", "hat"),
    ("hu", "hun"), ("hy", "hye"), ("hz", "her"),
    ("ia", "ina"), ("id", "ind"), ("ie", "ile"), ("ig", "ibo"), ("ii", "iii"), ("ik", "ipk"),
    ("io", "ido"), ("is", "isl"), ("it", "ita"), ("iu", "iku"),
    ("ja", "jpn"), ("jv", "jav"),
    ("ka", "kat"), ("kg", "kon"), ("ki", "kik"), ("kj", "kua"), ("kk", "kaz"), ("kl", "kal"),
    ("km", "khm"), ("kn", "kan"), ("ko", "kor"), ("kr", "kau"), ("ks", "kas"), ("ku", "kur"),
    ("kv", "kom"), ("kw", "cor"), ("ky", "kir"),
    ("la", "lat"), ("lb", "ltz"), ("lg", "lug"), ("li", "lim"), ("ln", "lin"), ("lo", "lao"),
    ("lt", "lit"), ("lu", "lub"), ("lv", "lav"),
    ("mg", "mlg"), ("mh", "mah"), ("mi", "mri"), ("mk", "mkd"), ("ml", "mal"), ("mn", "mon"),
    ("mr", "mar"), ("ms", "msa"), ("mt", "mlt"), ("my", "mya"),
    ("na", "nau"), ("nb", "nob"), ("nd", "nde"), ("ne", "nep"), ("ng", "ndo"), ("nl", "nld"),
    ("nn", "nno"), ("no", "nor"), ("nr", "nbl"), ("nv", "nav"), ("ny", "nya"),
    ("oc", "oci"), ("oj", "oji"), ("om", "orm"), ("or", "ori"), ("os", "oss"),
    ("pa", "pan"), ("pi", "pli"), ("pl", "pol"), ("ps", "pus"), ("pt", "por"),
    ("qu", "que"),
    ("rm", "roh"), ("rn", "run"), ("ro", "ron"), ("ru", "rus"), ("rw", "kin"),
    ("sa", "san"), ("sc", "srd"), ("sd", "snd"), ("se", "sme"), ("sg", "sag"), ("si", "sin"),
    ("sk", "slk"), ("sl", "slv"), ("sm", "smo"), ("sn", "sna"), ("so", "som"), ("sq", "sqi"),
    ("sr", "srp"), ("ss", "ssw"), ("st", "sot"), ("su", "sun"), ("sv", "swe"), ("sw", "swa"),
    ("ta", "tam"), ("te", "tel"), ("tg", "tgk"), ("th", "tha"), ("ti", "tir"), ("tk", "tuk"),
    ("tl", "tgl"), ("tn", "tsn"), ("to", "ton"), ("tr", "tur"), ("ts", "tso"), ("tt", "tat"),
    ("tw", "twi"), ("ty", "tah"),
    ("ug", "uig"), ("uk", "ukr"), ("ur", "urd"), ("uz", "uzb"),
    ("ve", "ven"), ("vi", "vie"), ("vo", "vol"),
    ("wa", "wln"), ("wo", "wol"),
    ("xh", "xho"),
    ("yi", "yid"), ("yo", "yor"),
    ("za", "zha"), ("zh", "zho"), ("zu", "zul"),
];

fn lookup<'a>(table: &'a [(&'a str, &'a str)], short: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(two, _)| *two == short)
        .map(|(_, three)| *three)
}

fn reverse_lookup<'a>(table: &'a [(&'a str, &'a str)], long: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(_, three)| *three == long)
        .map(|(two, _)| *two)
}

fn check_code(kind: &str, code: &str, len: usize) -> Result<(), CallError> {
    if code.len() == len && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(CallError::InvalidArgument(format!(
            "'{}' is not a {}-letter {} code",
            code, len, kind
        )))
    }
}

fn missing(kind: &str, locale: &Locale) -> CallError {
    CallError::InvalidArgument(format!("locale '{}' has no {}", locale, kind))
}

/// Locale to ISO 3166 alpha-2 country code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryAlpha2Codec;

impl Codec<Locale, String> for CountryAlpha2Codec {
    fn encode(&self, input: &Locale) -> Result<String, CallError> {
        if input.country().is_empty() {
            return Err(missing("country", input));
        }
        // numeric UN M.49 regions have no alpha code
        check_code("country", input.country(), 2)?;
        Ok(input.country().to_string())
    }

    fn decode(&self, input: &String) -> Result<Locale, CallError> {
        check_code("country", input, 2)?;
        Ok(Locale::country_only(input))
    }
}

/// Locale to ISO 3166 alpha-3 country code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryAlpha3Codec;

impl Codec<Locale, String> for CountryAlpha3Codec {
    fn encode(&self, input: &Locale) -> Result<String, CallError> {
        let alpha2 = CountryAlpha2Codec.encode(input)?;
        lookup(COUNTRIES, &alpha2)
            .map(str::to_string)
            .ok_or_else(|| {
                CallError::InvalidArgument(format!("no three-letter code for country {}", alpha2))
            })
    }

    fn decode(&self, input: &String) -> Result<Locale, CallError> {
        check_code("country", input, 3)?;
        reverse_lookup(COUNTRIES, &input.to_ascii_uppercase())
            .map(Locale::country_only)
            .ok_or_else(|| CallError::InvalidArgument(format!("unknown country code {}", input)))
    }
}

/// Locale to ISO 639-1 language code.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageAlpha2Codec;

impl Codec<Locale, String> for LanguageAlpha2Codec {
    fn encode(&self, input: &Locale) -> Result<String, CallError> {
        if input.language().is_empty() {
            return Err(missing("language", input));
        }
        check_code("language", input.language(), 2)?;
        Ok(input.language().to_string())
    }

    fn decode(&self, input: &String) -> Result<Locale, CallError> {
        check_code("language", input, 2)?;
        Ok(Locale::language_only(input))
    }
}

/// Locale to ISO 639-2/T language code.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageAlpha3Codec;

impl Codec<Locale, String> for LanguageAlpha3Codec {
    fn encode(&self, input: &Locale) -> Result<String, CallError> {
        let language = input.language();
        if language.is_empty() {
            return Err(missing("language", input));
        }
        if language.len() == 3 {
            return Ok(language.to_string());
        }
        lookup(LANGUAGES, language)
            .map(str::to_string)
            .ok_or_else(|| {
                CallError::InvalidArgument(format!("no three-letter code for language {}", language))
            })
    }

    fn decode(&self, input: &String) -> Result<Locale, CallError> {
        check_code("language", input, 3)?;
        reverse_lookup(LANGUAGES, &input.to_ascii_lowercase())
            .map(Locale::language_only)
            .ok_or_else(|| CallError::InvalidArgument(format!("unknown language code {}", input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> Locale {
        Locale::parse("de_DE").unwrap()
    }

    #[test]
    fn test_country_codes() {
        assert_eq!(CountryAlpha2Codec.encode(&german()).unwrap(), "DE");
        assert_eq!(CountryAlpha3Codec.encode(&german()).unwrap(), "DEU");
        assert_eq!(
            CountryAlpha3Codec.decode(&"aut".to_string()).unwrap(),
            Locale::country_only("AT")
        );
        assert_eq!(
            CountryAlpha2Codec.decode(&"ch".to_string()).unwrap().to_string(),
            "_CH"
        );
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(LanguageAlpha2Codec.encode(&german()).unwrap(), "de");
        assert_eq!(LanguageAlpha3Codec.encode(&german()).unwrap(), "deu");
        assert_eq!(
            LanguageAlpha3Codec.decode(&"deu".to_string()).unwrap(),
            Locale::language_only("de")
        );
    }

    #[test]
    fn test_inverse_swaps_directions() {
        let codec = LanguageAlpha3Codec.inverse();
        assert_eq!(codec.encode(&"eng".to_string()).unwrap(), Locale::language_only("en"));
        assert_eq!(codec.decode(&Locale::language_only("fr")).unwrap(), "fra");
    }

    #[test]
    fn test_missing_parts_are_rejected() {
        let language_only = Locale::language_only("de");
        assert!(CountryAlpha2Codec.encode(&language_only).is_err());
        assert!(CountryAlpha3Codec.encode(&language_only).is_err());
        assert!(LanguageAlpha3Codec.encode(&Locale::country_only("DE")).is_err());
    }

    #[test]
    fn test_unknown_and_malformed_codes() {
        assert!(CountryAlpha3Codec.decode(&"XXX".to_string()).is_err());
        assert!(CountryAlpha2Codec.decode(&"D".to_string()).is_err());
        assert!(LanguageAlpha2Codec.decode(&"d3".to_string()).is_err());
        assert!(LanguageAlpha3Codec.decode(&"qqq".to_string()).is_err());
    }

    #[test]
    fn test_codes_across_regions() {
        let cases = [
            ("pt_AO", "por", "AGO"),
            ("en_NG", "eng", "NGA"),
            ("ur_PK", "urd", "PAK"),
            ("es_PE", "spa", "PER"),
            ("nb_NO", "nob", "NOR"),
            ("sw_KE", "swa", "KEN"),
            ("km_KH", "khm", "KHM"),
        ];
        for (tag, language3, country3) in cases {
            let locale = Locale::parse(tag).unwrap();
            assert_eq!(LanguageAlpha3Codec.encode(&locale).unwrap(), language3, "{}", tag);
            assert_eq!(CountryAlpha3Codec.encode(&locale).unwrap(), country3, "{}", tag);
        }
        assert_eq!(
            CountryAlpha3Codec.decode(&"BES".to_string()).unwrap(),
            Locale::country_only("BQ")
        );
    }

    #[test]
    fn test_alpha2_rejects_longer_and_numeric_codes() {
        let locale = Locale::parse("deu_419").unwrap();
        assert!(LanguageAlpha2Codec.encode(&locale).is_err());
        assert!(CountryAlpha2Codec.encode(&locale).is_err());
        assert!(CountryAlpha3Codec.encode(&locale).is_err());
        assert_eq!(LanguageAlpha3Codec.encode(&locale).unwrap(), "deu");
    }

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(COUNTRIES.len(), 249);
        assert_eq!(LANGUAGES.len(), 183);
        for (two, three) in COUNTRIES {
            assert_eq!(two.len(), 2);
            assert_eq!(three.len(), 3);
            assert_eq!(lookup(COUNTRIES, two), Some(*three));
            assert_eq!(reverse_lookup(COUNTRIES, three), Some(*two));
        }
        for (two, three) in LANGUAGES {
            assert_eq!(lookup(LANGUAGES, two), Some(*three));
            assert_eq!(reverse_lookup(LANGUAGES, three), Some(*two));
        }
    }
}
