use fcase_domain::vector::Vector3;
use fcase_fields::{Field, FieldSpec, FieldValue};
use proptest::prelude::*;

proptest! {
    #[test]
    fn finite_numbers_become_uniform_fixed_values(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let field = FieldSpec::from(x).resolve().unwrap();
        prop_assert_eq!(field, Field::fixed_value(FieldValue::uniform(x)));
    }

    #[test]
    fn vectors_read_back_from_text(c in proptest::array::uniform3(-1.0e6f64..1.0e6)) {
        let field = Field::fixed_value(Vector3(c));
        prop_assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,64}") {
        let _ = Field::from_scalar(&text);
    }
}
