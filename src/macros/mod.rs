//! Ergonomic macros for building candidate [`Value`](crate::Value)s.
//!
//! - [`macro@crate::table`] - Builds a keyed table from `key => value` pairs.
//! - [`macro@crate::array`] - Builds a table whose array part holds the listed items.
//!
//! Both expand to a [`Value::Table`](crate::Value::Table) and nest freely.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{array, table, Value};
//!
//! let user = table! {
//!     "name" => "ada",
//!     "roles" => array!["admin", "dev"],
//!     "address" => table! { "city" => "London" },
//! };
//!
//! let roles = user.as_table().and_then(|t| t.get("roles")).and_then(Value::as_table);
//! assert_eq!(roles.map(|r| r.sequence_len()), Some(2));
//! ```

/// Builds a [`Value::Table`](crate::Value::Table) from `key => value` pairs.
///
/// Keys are anything convertible into [`Key`](crate::Key), values anything
/// convertible into [`Value`](crate::Value).
///
/// # Examples
///
/// ```
/// use schema_rail::{table, Value};
///
/// let v = table! { "id" => 7, 0 => "first" };
/// let t = v.as_table().unwrap();
///
/// assert_eq!(t.get("id"), Some(&Value::from(7)));
/// assert_eq!(t.sequence_len(), 1);
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::Value::Table($crate::Table::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert($key, $value);
        )+
        $crate::Value::Table(table)
    }};
}

/// Builds a [`Value::Table`](crate::Value::Table) holding the items at
/// indices `0, 1, 2, ...`.
///
/// # Examples
///
/// ```
/// use schema_rail::{array, Value};
///
/// let v = array![1, "two", true];
/// let items: Vec<&Value> = v.as_table().unwrap().sequence().collect();
///
/// assert_eq!(items, vec![&Value::from(1), &Value::from("two"), &Value::from(true)]);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::Table($crate::Table::new())
    };
    ($($item:expr),+ $(,)?) => {{
        let mut table = $crate::Table::new();
        $(
            table.push($item);
        )+
        $crate::Value::Table(table)
    }};
}
