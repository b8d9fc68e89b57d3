use glossa_semantics::{Operand, PluralCategory, Resolution, Substitution};

#[test]
fn test_categories_round_trip_through_names() {
    for category in PluralCategory::ALL {
        assert_eq!(PluralCategory::from_name(category.name()), Some(category));
    }
    assert_eq!(PluralCategory::from_name("One"), None);
    assert_eq!(PluralCategory::from_name("=0"), None);
}

#[test]
fn test_categories_are_ordered_for_dispatch() {
    let mut shuffled = vec![
        PluralCategory::Other,
        PluralCategory::Few,
        PluralCategory::Zero,
        PluralCategory::Many,
        PluralCategory::One,
        PluralCategory::Two,
    ];
    shuffled.sort();
    assert_eq!(shuffled, PluralCategory::ALL.to_vec());
}

#[test]
fn test_category_display_and_type_name() {
    assert_eq!(PluralCategory::Few.to_string(), "few");
    assert_eq!(PluralCategory::Few.type_name(), "Few");
    assert_eq!(PluralCategory::Other.type_name(), "Other");
}

#[test]
fn test_operand_symbols_round_trip() {
    for symbol in ['n', 'i', 'v', 'w', 'f', 't', 'c', 'e'] {
        let operand = Operand::from_symbol(symbol).unwrap();
        assert_eq!(operand.symbol(), symbol);
        assert_eq!(operand.to_string(), symbol.to_string());
    }
    assert_eq!(Operand::from_symbol('x'), None);
    assert_eq!(Operand::from_symbol('N'), None);
}

#[test]
fn test_integer_substitution_table() {
    let table = Substitution::INTEGER;
    assert_eq!(table.resolve(Operand::N), Resolution::Variable(Operand::N));
    assert_eq!(table.resolve(Operand::I), Resolution::Variable(Operand::N));
    for zeroed in [
        Operand::V,
        Operand::W,
        Operand::F,
        Operand::T,
        Operand::C,
        Operand::E,
    ] {
        assert_eq!(table.resolve(zeroed), Resolution::Constant(0));
    }
    assert_eq!(Substitution::default(), Substitution::INTEGER);
}

#[test]
fn test_custom_substitution_leaves_unlisted_operands_alone() {
    let table = Substitution {
        canonical: Operand::N,
        aliases: &[],
        zeroed: &[Operand::V],
    };
    assert_eq!(table.resolve(Operand::I), Resolution::Variable(Operand::I));
    assert_eq!(table.resolve(Operand::F), Resolution::Variable(Operand::F));
    assert_eq!(table.resolve(Operand::V), Resolution::Constant(0));
}
