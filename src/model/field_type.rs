use std::fmt;

/// Type of a custom field.
///
/// Variant order mirrors the `typeId` numbering of the API: the ordinal of a
/// variant is its `typeId`. Reordering variants breaks decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    #[default]
    Unknown,
    String,
    Integer,
    Text,
    Url,
    Checkbox,
    Dropdown,
    User,
    Date,
    Milestone,
    Steps,
    StepResults,
    MultiSelect,
}

/// Which options structure a field type carries and which members it declares
#[derive(Debug, PartialEq, Eq)]
pub struct OptionsShape {
    pub name: &'static str,
    pub attributes: &'static [&'static str],
}

const UNKNOWN_SHAPE: OptionsShape = OptionsShape { name: "Options", attributes: &[] };
const STRING_SHAPE: OptionsShape = OptionsShape { name: "StringOptions", attributes: &["defaultValue"] };
const INTEGER_SHAPE: OptionsShape = OptionsShape { name: "IntegerOptions", attributes: &["defaultValue"] };
const TEXT_SHAPE: OptionsShape = OptionsShape {
    name: "TextOptions",
    attributes: &["defaultValue", "format", "rows"],
};
const URL_SHAPE: OptionsShape = OptionsShape { name: "UrlOptions", attributes: &["defaultValue"] };
const CHECKBOX_SHAPE: OptionsShape = OptionsShape { name: "CheckboxOptions", attributes: &["defaultValue"] };
const DROPDOWN_SHAPE: OptionsShape = OptionsShape {
    name: "DropdownOptions",
    attributes: &["defaultValue", "items"],
};
const USER_SHAPE: OptionsShape = OptionsShape { name: "UserOptions", attributes: &["defaultValue"] };
const DATE_SHAPE: OptionsShape = OptionsShape { name: "DateOptions", attributes: &[] };
const MILESTONE_SHAPE: OptionsShape = OptionsShape { name: "MilestoneOptions", attributes: &[] };
const STEPS_SHAPE: OptionsShape = OptionsShape {
    name: "StepsOptions",
    attributes: &["format", "hasExpected", "rows"],
};
const STEP_RESULTS_SHAPE: OptionsShape = OptionsShape {
    name: "StepResultsOptions",
    attributes: &["format", "hasExpected", "hasActual"],
};
const MULTI_SELECT_SHAPE: OptionsShape = OptionsShape { name: "MultiSelectOptions", attributes: &["items"] };

impl FieldType {
    /// All variants in `typeId` order
    pub const ALL: [FieldType; 13] = [
        FieldType::Unknown,
        FieldType::String,
        FieldType::Integer,
        FieldType::Text,
        FieldType::Url,
        FieldType::Checkbox,
        FieldType::Dropdown,
        FieldType::User,
        FieldType::Date,
        FieldType::Milestone,
        FieldType::Steps,
        FieldType::StepResults,
        FieldType::MultiSelect,
    ];

    /// Resolve a wire `typeId`. Anything outside `0..13` is `Unknown`.
    pub fn from_type_id(type_id: i64) -> Self {
        usize::try_from(type_id)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(FieldType::Unknown)
    }

    pub fn type_id(self) -> i64 {
        self as i64
    }

    pub fn options_shape(self) -> &'static OptionsShape {
        match self {
            FieldType::Unknown => &UNKNOWN_SHAPE,
            FieldType::String => &STRING_SHAPE,
            FieldType::Integer => &INTEGER_SHAPE,
            FieldType::Text => &TEXT_SHAPE,
            FieldType::Url => &URL_SHAPE,
            FieldType::Checkbox => &CHECKBOX_SHAPE,
            FieldType::Dropdown => &DROPDOWN_SHAPE,
            FieldType::User => &USER_SHAPE,
            FieldType::Date => &DATE_SHAPE,
            FieldType::Milestone => &MILESTONE_SHAPE,
            FieldType::Steps => &STEPS_SHAPE,
            FieldType::StepResults => &STEP_RESULTS_SHAPE,
            FieldType::MultiSelect => &MULTI_SELECT_SHAPE,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            FieldType::Unknown => "UNKNOWN",
            FieldType::String => "STRING",
            FieldType::Integer => "INTEGER",
            FieldType::Text => "TEXT",
            FieldType::Url => "URL",
            FieldType::Checkbox => "CHECKBOX",
            FieldType::Dropdown => "DROPDOWN",
            FieldType::User => "USER",
            FieldType::Date => "DATE",
            FieldType::Milestone => "MILESTONE",
            FieldType::Steps => "STEPS",
            FieldType::StepResults => "STEP_RESULTS",
            FieldType::MultiSelect => "MULTI_SELECT",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_every_ordinal_resolves_to_its_variant() {
        for (index, field_type) in FieldType::ALL.iter().enumerate() {
            assert_eq!(FieldType::from_type_id(index as i64), *field_type);
            assert_eq!(field_type.type_id(), index as i64);
        }
    }

    #[rstest]
    #[case(-1)]
    #[case(-100)]
    #[case(13)]
    #[case(14)]
    #[case(2_147_483_648)]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn test_out_of_range_is_unknown(#[case] type_id: i64) {
        assert_eq!(FieldType::from_type_id(type_id), FieldType::Unknown);
    }

    #[rstest]
    #[case(1, FieldType::String)]
    #[case(4, FieldType::Url)]
    #[case(5, FieldType::Checkbox)]
    #[case(6, FieldType::Dropdown)]
    #[case(12, FieldType::MultiSelect)]
    fn test_known_type_ids(#[case] type_id: i64, #[case] expected: FieldType) {
        assert_eq!(FieldType::from_type_id(type_id), expected);
    }

    #[test]
    fn test_shapes_are_one_to_one() {
        let names: std::collections::HashSet<&str> =
            FieldType::ALL.iter().map(|t| t.options_shape().name).collect();
        assert_eq!(names.len(), FieldType::ALL.len());
    }

    #[rstest]
    #[case(FieldType::Checkbox, &["defaultValue"])]
    #[case(FieldType::Dropdown, &["defaultValue", "items"])]
    #[case(FieldType::StepResults, &["format", "hasExpected", "hasActual"])]
    #[case(FieldType::Date, &[])]
    fn test_shape_attributes(#[case] field_type: FieldType, #[case] attributes: &[&str]) {
        assert_eq!(field_type.options_shape().attributes, attributes);
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(FieldType::StepResults.to_string(), "STEP_RESULTS");
        assert_eq!(FieldType::MultiSelect.to_string(), "MULTI_SELECT");
        assert_eq!(FieldType::default().to_string(), "UNKNOWN");
    }
}
