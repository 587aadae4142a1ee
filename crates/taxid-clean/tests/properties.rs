//! Property tests for the cleaning invariants.

use polars::prelude::*;
use proptest::prelude::*;
use taxid_clean::{ParallelMapper, SequentialMapper, clean_pe_ruc_with, clean_vatin_with};
use taxid_common::NULL_VALUES;
use taxid_model::{ErrorPolicy, RucCleanOptions, RucFormat, VatCleanOptions};
use taxid_standards::{PeRuc, Vatin};

fn frame(values: &[String]) -> DataFrame {
    DataFrame::new(vec![Series::new("id".into(), values.to_vec()).into_column()]).unwrap()
}

fn clean_column(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(String::from))
        .collect()
}

/// Raw values mixing valid numbers, near misses, separators and nulls.
fn raw_ruc() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("20512333797".to_string()),
        Just("10467793549".to_string()),
        Just("20512-333 797".to_string()),
        Just("20512333798".to_string()),
        prop::sample::select(NULL_VALUES.to_vec()).prop_map(String::from),
        "[0-9 -]{0,14}",
    ]
}

fn raw_vat() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("FR 40 303 265 045".to_string()),
        Just("DE136,695 976".to_string()),
        Just("nl 4495445b01".to_string()),
        Just("ZZ123".to_string()),
        prop::sample::select(NULL_VALUES.to_vec()).prop_map(String::from),
        "[A-Z]{2}[0-9 .]{0,12}",
    ]
}

fn policy() -> impl Strategy<Value = ErrorPolicy> {
    prop_oneof![Just(ErrorPolicy::Coerce), Just(ErrorPolicy::Ignore)]
}

proptest! {
    #[test]
    fn ruc_output_is_row_aligned(values in prop::collection::vec(raw_ruc(), 0..200), errors in policy()) {
        let df = frame(&values);
        let options = RucCleanOptions::new().with_errors(errors).with_progress(false);
        let mapper = ParallelMapper::new().with_chunk_size(16);

        let parallel = clean_pe_ruc_with(&df, "id", &options, &PeRuc, &mapper).unwrap();
        let sequential = clean_pe_ruc_with(&df, "id", &options, &PeRuc, &SequentialMapper).unwrap();

        prop_assert_eq!(parallel.frame.height(), values.len());
        prop_assert_eq!(clean_column(&parallel.frame, "id_clean"), clean_column(&sequential.frame, "id_clean"));

        // Each row depends on its own input only.
        let cleaned = clean_column(&parallel.frame, "id_clean");
        for (idx, value) in values.iter().enumerate() {
            let single = clean_pe_ruc_with(&frame(std::slice::from_ref(value)), "id", &options, &PeRuc, &SequentialMapper).unwrap();
            prop_assert_eq!(&clean_column(&single.frame, "id_clean")[0], &cleaned[idx]);
        }
    }

    #[test]
    fn ruc_compact_is_fixed_point(values in prop::collection::vec(raw_ruc(), 1..50)) {
        let df = frame(&values);
        let options = RucCleanOptions::new()
            .with_output_format(RucFormat::Compact)
            .with_progress(false);

        let once = clean_pe_ruc_with(&df, "id", &options, &PeRuc, &SequentialMapper).unwrap();
        let first = clean_column(&once.frame, "id_clean");
        let again_input: Vec<String> = first.iter().map(|v| v.clone().unwrap_or_default()).collect();
        let twice = clean_pe_ruc_with(&frame(&again_input), "id", &options, &PeRuc, &SequentialMapper).unwrap();

        prop_assert_eq!(clean_column(&twice.frame, "id_clean"), first);
    }

    #[test]
    fn vat_compact_is_fixed_point(values in prop::collection::vec(raw_vat(), 1..50)) {
        let df = frame(&values);
        let options = VatCleanOptions::new().with_progress(false);

        let once = clean_vatin_with(&df, "id", &options, &Vatin, &SequentialMapper).unwrap();
        let first = clean_column(&once.frame, "id_clean");
        let again_input: Vec<String> = first.iter().map(|v| v.clone().unwrap_or_default()).collect();
        let twice = clean_vatin_with(&frame(&again_input), "id", &options, &Vatin, &SequentialMapper).unwrap();

        prop_assert_eq!(clean_column(&twice.frame, "id_clean"), first);
    }

    #[test]
    fn null_sentinels_are_always_absent(
        sentinel in prop::sample::select(NULL_VALUES.to_vec()),
        errors in prop_oneof![Just(ErrorPolicy::Coerce), Just(ErrorPolicy::Ignore), Just(ErrorPolicy::Raise)],
        format in prop_oneof![Just(RucFormat::Compact), Just(RucFormat::Standard), Just(RucFormat::Dni)],
        split in any::<bool>(),
    ) {
        let df = frame(&[sentinel.to_string()]);

        let ruc = clean_pe_ruc_with(
            &df, "id",
            &RucCleanOptions::new().with_output_format(format).with_errors(errors).with_progress(false),
            &PeRuc, &SequentialMapper,
        ).unwrap();
        prop_assert_eq!(clean_column(&ruc.frame, "id_clean"), vec![None]);

        let vat = clean_vatin_with(
            &df, "id",
            &VatCleanOptions::new().with_split(split).with_errors(errors).with_progress(false),
            &Vatin, &SequentialMapper,
        ).unwrap();
        prop_assert_eq!(clean_column(&vat.frame, "id_clean"), vec![None]);
        if split {
            prop_assert_eq!(clean_column(&vat.frame, "country_code"), vec![None]);
            prop_assert_eq!(clean_column(&vat.frame, "identifier"), vec![None]);
        }
    }
}
