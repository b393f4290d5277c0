use crate::Sampler;
use crate::UniformSource;

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Anders", "Beatriz", "Bjorn", "Carmen", "Chen", "Dalia", "Dmitri",
    "Elif", "Emeka", "Farah", "Felix", "Greta", "Hana", "Hugo", "Ines", "Ivan", "Jamal", "Jun",
    "Kai", "Kavya", "Lena", "Lucas", "Maya", "Mateo", "Nadia", "Noah", "Olga", "Omar", "Priya",
    "Quinn", "Rafael", "Rosa", "Sami", "Sofia", "Tariq", "Thea", "Uma", "Viktor", "Wen", "Yara",
    "Yusuf", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Abara", "Andersson", "Bianchi", "Brown", "Castillo", "Chen", "Dubois", "Eriksen", "Fischer",
    "Garcia", "Haddad", "Ivanova", "Jensen", "Kim", "Kowalski", "Lopez", "Mbeki", "Meyer",
    "Nakamura", "Novak", "Okafor", "Olsen", "Petrov", "Quispe", "Rossi", "Santos", "Schmidt",
    "Silva", "Tanaka", "Usman", "Varga", "Walker", "Wang", "Yilmaz", "Zhang",
];

impl<S: UniformSource> Sampler<S> {
    pub fn first_name(&self) -> &'static str {
        FIRST_NAMES[self.index(FIRST_NAMES.len())]
    }

    pub fn last_name(&self) -> &'static str {
        LAST_NAMES[self.index(LAST_NAMES.len())]
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedSource;

    #[test]
    fn full_name_joins_both_tables() {
        let sampler = Sampler::new(FixedSource::new([0.0, 0.999]));
        assert_eq!(sampler.full_name(), "Ada Zhang");
        let name = crate::testing::seeded(50).full_name();
        let (first, last) = name.split_once(' ').unwrap();
        assert!(FIRST_NAMES.contains(&first));
        assert!(LAST_NAMES.contains(&last));
    }
}
