//! Property-based tests for the validation engine.

#[cfg(test)]
mod property_tests {
    use crate::condition::Condition;
    use crate::entity::{Entity, Member};
    use crate::specification::ValueSpecification;
    use crate::wrapper::{NonRequired, Required, ValueWrapper};
    use proptest::prelude::*;

    enum Word {}

    impl ValueSpecification for Word {
        type Value = String;

        fn conditions() -> Vec<Condition<String>> {
            vec![
                Condition::new("Non-empty", |v: &String| !v.is_empty()),
                Condition::new("Lowercase", |v: &String| {
                    v.chars().all(|c| c.is_ascii_lowercase())
                }),
                Condition::new("At most 5 characters", |v: &String| v.chars().count() <= 5),
            ]
        }
    }

    fn expected_failures(value: &str) -> Vec<String> {
        let mut failed = Vec::new();
        if value.is_empty() {
            failed.push("Non-empty".to_string());
        }
        if !value.chars().all(|c| c.is_ascii_lowercase()) {
            failed.push("Lowercase".to_string());
        }
        if value.chars().count() > 5 {
            failed.push("At most 5 characters".to_string());
        }
        failed
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        prop_oneof!["[a-z]{0,8}", "[a-zA-Z0-9 ]{0,8}"]
    }

    struct Form {
        required: Vec<Required<Word>>,
        optional: Vec<NonRequired<Word>>,
    }

    impl Entity for Form {
        fn members(&self) -> Vec<Member<'_>> {
            let required = self.required.iter().map(|w| Member::new("required", w));
            let optional = self.optional.iter().map(|w| Member::new("optional", w));
            required.chain(optional).collect()
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // An absent mandatory value is never valid, whatever the conditions.
        #[test]
        fn absent_mandatory_is_not_set(_seed in any::<u8>()) {
            let wrapper = Required::<Word>::new();
            let error = wrapper.validate().unwrap_err();
            prop_assert!(error.is_value_not_set());
            prop_assert_eq!(error.origin(), "Word");
        }

        // An absent optional value is always valid and reads as `None`.
        #[test]
        fn absent_optional_is_valid(_seed in any::<u8>()) {
            let wrapper = NonRequired::<Word>::new();
            prop_assert!(wrapper.is_valid());
            prop_assert_eq!(wrapper.valid_value().unwrap(), None);
        }

        // The failed conditions are exactly the failing descriptions, in
        // declaration order, and a present value is valid iff none failed.
        #[test]
        fn failed_conditions_are_exact(value in word_strategy()) {
            let expected = expected_failures(&value);
            let wrapper = Required::<Word>::with_value(value.clone());

            match wrapper.validate() {
                Ok(()) => {
                    prop_assert!(expected.is_empty());
                    prop_assert_eq!(wrapper.value(), Some(value));
                }
                Err(error) => {
                    prop_assert!(error.is_value_not_valid());
                    prop_assert_eq!(error.failed_conditions(), expected.as_slice());
                    prop_assert_eq!(wrapper.value(), None);
                }
            }
        }

        // Both policies agree on present values.
        #[test]
        fn policies_agree_on_present_values(value in word_strategy()) {
            let required = Required::<Word>::with_value(value.clone());
            let optional = NonRequired::<Word>::with_value(value);
            prop_assert_eq!(required.is_valid(), optional.is_valid());
        }

        // Validation has no side effects: repeating it gives the same result.
        #[test]
        fn validation_is_idempotent(value in proptest::option::of(word_strategy())) {
            let mut wrapper = Required::<Word>::new();
            if let Some(value) = value {
                wrapper.set(value);
            }
            prop_assert_eq!(wrapper.validate(), wrapper.validate());
        }

        // The entity reports one issue per failing member and nothing else.
        #[test]
        fn entity_counts_every_failure(
            required in proptest::collection::vec(proptest::option::of(word_strategy()), 0..6),
            optional in proptest::collection::vec(proptest::option::of(word_strategy()), 0..6),
        ) {
            let form = Form {
                required: required
                    .into_iter()
                    .map(|draft| match draft {
                        Some(value) => Required::with_value(value),
                        None => Required::new(),
                    })
                    .collect(),
                optional: optional
                    .into_iter()
                    .map(|draft| match draft {
                        Some(value) => NonRequired::with_value(value),
                        None => NonRequired::new(),
                    })
                    .collect(),
            };

            let failing = form
                .members()
                .iter()
                .filter(|member| !ValueWrapper::is_valid(member.wrapper()))
                .count();

            match form.validate() {
                Ok(()) => prop_assert_eq!(failing, 0),
                Err(error) => {
                    prop_assert!(error.is_entity_not_valid());
                    prop_assert_eq!(error.issues().len(), failing);
                    prop_assert_eq!(
                        error.report().message.lines().count(),
                        failing + 1
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod thread_safety {
    use crate::condition::Condition;
    use crate::entity::{Entity, Member};
    use crate::error::ValidationError;
    use crate::issues::Issues;
    use crate::specification::ValueSpecification;
    use crate::wrapper::{NonRequired, NonRequiredBase, Required, RequiredBase};
    use std::thread;

    enum Code {}

    impl ValueSpecification for Code {
        type Value = String;

        fn conditions() -> Vec<Condition<String>> {
            vec![Condition::new("Uppercase", |v: &String| {
                v.chars().all(|c| c.is_ascii_uppercase())
            })]
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shared_types_are_send_and_sync() {
        assert_send_sync::<Required<Code>>();
        assert_send_sync::<NonRequired<Code>>();
        assert_send_sync::<RequiredBase<u32>>();
        assert_send_sync::<NonRequiredBase<String>>();
        assert_send_sync::<Condition<String>>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<Issues>();
    }

    struct Voucher {
        code: Required<Code>,
        region: NonRequired<Code>,
    }

    impl Entity for Voucher {
        fn members(&self) -> Vec<Member<'_>> {
            vec![
                Member::new("code", &self.code),
                Member::new("region", &self.region),
            ]
        }
    }

    #[test]
    fn read_only_validation_across_threads() {
        let voucher = Voucher {
            code: Required::new(),
            region: NonRequired::with_value("eu".to_string()),
        };
        let expected = voucher.validate();

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| voucher.validate()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert!(expected.is_err());
        assert!(results.iter().all(|result| *result == expected));
    }
}
