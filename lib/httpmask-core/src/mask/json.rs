//! Type-directed masking of JSON trees addressed by dotted field paths.
//!
//! A dotted path such as `user.address.street` addresses a leaf through successive
//! object key lookups. A numeric segment indexes into an array, so `cards.0.number`
//! addresses the number of the first card. The masked placeholder depends on the kind of the leaf:
//!
//! | Leaf kind         | Placeholder                       |
//! |-------------------|-----------------------------------|
//! | object, array     | `null`                            |
//! | number            | `0`                               |
//! | string            | `*` repeated to the same length   |
//! | boolean, null     | `null`                            |
//!
//! All functions return a new tree and never touch the tree they are given.

use serde_json::Value;

use super::mask_full;

/// Separator between the segments of a dotted field path.
const PATH_SEPARATOR: char = '.';

/// Returns the masked placeholder for a single JSON node.
///
/// # Example
///
/// ```rust
/// use httpmask_core::mask::mask_value;
/// use serde_json::json;
///
/// assert_eq!(mask_value(&json!("secret")), json!("******"));
/// assert_eq!(mask_value(&json!(10.12)), json!(0));
/// assert_eq!(mask_value(&json!({"nested": true})), json!(null));
/// ```
#[must_use]
pub fn mask_value(value: &Value) -> Value {
    match value {
        Value::Number(_) => Value::from(0_i64),
        Value::String(text) => Value::String(mask_full(text)),
        Value::Object(_) | Value::Array(_) | Value::Bool(_) | Value::Null => Value::Null,
    }
}

/// Masks the leaf addressed by `dotted_path`.
///
/// Returns the input unchanged when a segment of the path is missing, when an array
/// segment is not an index in range, or when the path walks through a scalar.
///
/// # Example
///
/// ```rust
/// use httpmask_core::mask::mask_field;
/// use serde_json::json;
///
/// let user = json!({"name": "Alice", "card": {"number": "4111", "brand": "visa"}});
///
/// let masked = mask_field(&user, "card.number");
/// assert_eq!(masked, json!({"name": "Alice", "card": {"number": "****", "brand": "visa"}}));
///
/// // missing paths are ignored
/// assert_eq!(mask_field(&user, "card.cvv"), user);
/// ```
#[must_use]
pub fn mask_field(value: &Value, dotted_path: &str) -> Value {
    let mut result = value.clone();
    mask_path(&mut result, dotted_path);
    result
}

/// Masks every listed dotted path, in list order.
///
/// Returns the input unchanged when `dotted_paths` is empty or when the input is not
/// a JSON object.
///
/// # Example
///
/// ```rust
/// use httpmask_core::mask::mask_fields;
/// use serde_json::json;
///
/// let body = json!({"name": "Secret Name", "age": 10, "tags": ["a", "b"]});
///
/// let masked = mask_fields(&body, &["name", "age", "tags", "unknown"]);
/// assert_eq!(masked, json!({"name": "***********", "age": 0, "tags": null}));
/// ```
#[must_use]
pub fn mask_fields<S>(value: &Value, dotted_paths: &[S]) -> Value
where
    S: AsRef<str>,
{
    if dotted_paths.is_empty() || !value.is_object() {
        return value.clone();
    }

    let mut result = value.clone();
    for path in dotted_paths {
        mask_path(&mut result, path.as_ref());
    }
    result
}

/// Recursive descent over the owned copy.
fn mask_path(node: &mut Value, dotted_path: &str) {
    let (head, rest) = match dotted_path.split_once(PATH_SEPARATOR) {
        Some((head, rest)) => (head, Some(rest)),
        None => (dotted_path, None),
    };
    let Some(child) = child_mut(node, head) else {
        return;
    };

    match rest {
        Some(rest) => mask_path(child, rest),
        None => *child = mask_value(child),
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(fields) => fields.get_mut(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get_mut(index)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    #[fixture]
    fn customer() -> Value {
        json!({
            "name": "Secret Name",
            "age": 10,
            "collect": ["Test", "Ahow", "Deiad"],
            "insideObject": {
                "insideName": "InsideName",
                "address": "Non Secret",
                "insideInsideObject": {
                    "deepNameHideMe": "deepNameHideMe",
                    "address": "Secret"
                }
            }
        })
    }

    #[rstest]
    #[case::object(json!({"a": 1}))]
    #[case::empty_object(json!({}))]
    #[case::array(json!(["test", "one", "two"]))]
    #[case::empty_array(json!([]))]
    #[case::boolean(json!(true))]
    #[case::null(json!(null))]
    fn should_mask_to_null(#[case] value: Value) {
        assert_eq!(mask_value(&value), Value::Null);
    }

    #[rstest]
    #[case::integer(json!(10))]
    #[case::negative(json!(-42))]
    #[case::decimal(json!(10.12))]
    fn should_mask_number_to_zero(#[case] value: Value) {
        let masked = mask_value(&value);

        assert_eq!(masked, json!(0));
        assert_eq!(masked.as_i64(), Some(0));
    }

    #[test]
    fn should_mask_string_with_same_length() {
        assert_eq!(mask_value(&json!("What?")), json!("*****"));
    }

    #[rstest]
    fn should_mask_selected_fields(customer: Value) {
        let fields = [
            "name",
            "age",
            "collect",
            "insideObject.insideName",
            "insideObject.insideInsideObject.deepNameHideMe",
            "insideObject.insideInsideObject.address",
            "notexist",
        ];

        let masked = mask_fields(&customer, &fields);

        assert_eq!(
            masked,
            json!({
                "name": "***********",
                "age": 0,
                "collect": null,
                "insideObject": {
                    "insideName": "**********",
                    "address": "Non Secret",
                    "insideInsideObject": {
                        "deepNameHideMe": "**************",
                        "address": "******"
                    }
                }
            })
        );
    }

    #[rstest]
    fn should_not_touch_the_input(customer: Value) {
        let snapshot = customer.clone();

        let _masked = mask_field(&customer, "insideObject.insideName");

        assert_eq!(customer, snapshot);
    }

    #[rstest]
    #[case::missing_leaf("insideObject.unknown")]
    #[case::missing_parent("unknown.insideName")]
    #[case::missing_deep("insideObject.insideInsideObject.unknown.deeper")]
    #[case::through_string("name.first")]
    #[case::array_key("collect.first")]
    #[case::array_out_of_range("collect.3")]
    #[case::array_negative("collect.-1")]
    fn should_ignore_unresolved_path(customer: Value, #[case] path: &str) {
        assert_eq!(mask_field(&customer, path), customer);
    }

    #[rstest]
    fn should_mask_array_element_by_index(customer: Value) {
        let masked = mask_field(&customer, "collect.1");

        assert_eq!(masked["collect"], json!(["Test", "****", "Deiad"]));
    }

    #[test]
    fn should_mask_field_of_array_element() {
        let body = json!({"cards": [{"number": "4111111111111111", "brand": "visa"}, {"number": "5500"}]});

        let masked = mask_fields(&body, &["cards.0.number", "cards.1.number"]);

        assert_eq!(
            masked,
            json!({"cards": [{"number": "****************", "brand": "visa"}, {"number": "****"}]})
        );
    }

    #[rstest]
    fn should_mask_whole_container(customer: Value) {
        let masked = mask_field(&customer, "insideObject");

        assert_eq!(masked["insideObject"], Value::Null);
        assert_eq!(masked["name"], customer["name"]);
    }

    #[rstest]
    fn should_ignore_path_below_masked_container(customer: Value) {
        let masked = mask_fields(&customer, &["insideObject", "insideObject.insideName"]);

        assert_eq!(masked["insideObject"], Value::Null);
    }

    #[rstest]
    fn should_do_nothing_with_empty_fields(customer: Value) {
        let fields: [&str; 0] = [];

        assert_eq!(mask_fields(&customer, &fields), customer);
    }

    #[test]
    fn should_not_mask_when_not_an_object() {
        let value = json!("What?");

        assert_eq!(mask_fields(&value, &["name", "age"]), value);
    }

    #[test]
    fn should_not_mask_arrays_at_root() {
        let value = json!([{"name": "Alice"}]);

        assert_eq!(mask_fields(&value, &["name"]), value);
    }

    #[test]
    fn should_accept_owned_paths() {
        let value = json!({"token": "abc"});
        let fields = vec!["token".to_string()];

        assert_eq!(mask_fields(&value, &fields), json!({"token": "***"}));
    }
}
