text_enum! {
    ZodiacSign {
        Aries => "Aries",
        Taurus => "Taurus",
        Gemini => "Gemini",
        Cancer => "Cancer",
        Leo => "Leo",
        Virgo => "Virgo",
        Libra => "Libra",
        Scorpio => "Scorpio",
        Sagittarius => "Sagittarius",
        Capricorn => "Capricorn",
        Aquarius => "Aquarius",
        Pisces => "Pisces",
    }
}

text_enum! {
    Element {
        Fire => "Fire",
        Earth => "Earth",
        Air => "Air",
        Water => "Water",
    }
}

text_enum! {
    /// Strength of a planet's placement within its sign.
    Dignity {
        Domicile => "Domicile",
        Exaltation => "Exaltation",
        Detriment => "Detriment",
        Fall => "Fall",
        Neutral => "Neutral",
    }
}

text_enum! {
    /// Major aspects only; minor aspects are never requested.
    AspectType {
        Conjunction => "Conjunction",
        Sextile => "Sextile",
        Square => "Square",
        Trine => "Trine",
        Opposition => "Opposition",
    }
}

impl ZodiacSign {
    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_parsing_ignores_case_and_whitespace() {
        assert_eq!("aries".parse::<ZodiacSign>(), Ok(ZodiacSign::Aries));
        assert_eq!("  SCORPIO ".parse::<ZodiacSign>(), Ok(ZodiacSign::Scorpio));
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn test_sign_serializes_canonical_spelling() {
        let sign: ZodiacSign = serde_json::from_str("\"capricorn\"").unwrap();
        assert_eq!(serde_json::to_string(&sign).unwrap(), "\"Capricorn\"");
    }

    #[test]
    fn test_sign_elements() {
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Virgo.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
    }

    #[test]
    fn test_unknown_dignity_is_rejected_by_serde() {
        let res: Result<Dignity, _> = serde_json::from_str("\"Peregrine\"");
        assert!(res.is_err());
    }

    #[test]
    fn test_names_follow_declaration_order() {
        assert_eq!(
            AspectType::names(),
            vec!["Conjunction", "Sextile", "Square", "Trine", "Opposition"]
        );
    }
}
