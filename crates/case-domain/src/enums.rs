//! Enumeraciones de dominio usadas por las suites.
use case_core::argument_enum;

argument_enum! {
    /// Rangos ordenados de menor a mayor.
    pub enum Rank as "Rank" {
        Private => "PRIVATE",
        LanceCorporal => "LANCE_CORPORAL",
        Corporal => "CORPORAL",
        Sergeant => "SERGEANT",
        StaffSergeant => "STAFF_SERGEANT",
    }
}

argument_enum! {
    pub enum Gender as "Gender" {
        F => "F",
        M => "M",
    }
}

argument_enum! {
    /// Unidades temporales, de la más fina a la más gruesa.
    pub enum TemporalUnit as "TemporalUnit" {
        Nanos => "NANOS",
        Micros => "MICROS",
        Millis => "MILLIS",
        Seconds => "SECONDS",
        Minutes => "MINUTES",
        Hours => "HOURS",
        HalfDays => "HALF_DAYS",
        Days => "DAYS",
        Weeks => "WEEKS",
        Months => "MONTHS",
        Years => "YEARS",
        Decades => "DECADES",
        Centuries => "CENTURIES",
        Millennia => "MILLENNIA",
        Eras => "ERAS",
        Forever => "FOREVER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_core::ArgumentEnum;

    #[test]
    fn ranks_compare_by_declaration_order() {
        assert!(Rank::Private < Rank::LanceCorporal);
        assert!(Rank::Sergeant < Rank::StaffSergeant);
        assert_eq!(Rank::from_name("CORPORAL"), Some(Rank::Corporal));
        assert_eq!(TemporalUnit::variants().len(), 16);
    }
}
