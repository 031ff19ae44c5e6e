/// Builds an [`Object`](crate::Object) from document-like syntax.
///
/// - `null`, `true`, `false`
/// - `/Name` for names made of identifier characters
/// - numbers and string literals through the `From` conversions
///   (`"text"` becomes a string literal)
/// - `[a, b, ...]` for arrays and `{ "Key": value, ... }` for dictionaries
/// - any other expression in parentheses, e.g. `(Object::reference(3, 0))`
///
/// # Examples
///
/// ```rust
/// use pdfobj::{pdf, Object};
///
/// let page = pdf!({
///     "Type": /Page,
///     "MediaBox": [0, 0, 612, 792],
///     "Parent": (Object::reference(2, 0)),
///     "Rotate": -90
/// });
///
/// assert_eq!(
///     page.canonical_string(),
///     "<</Type/Page/MediaBox[0 0 612 792]/Parent 2 0 R/Rotate -90>>"
/// );
/// ```
#[macro_export]
macro_rules! pdf {
    // Array entries, munched one at a time
    (@array $array:ident;) => {};
    (@array $array:ident; / $name:ident $(, $($rest:tt)*)?) => {
        $array.push($crate::Object::Name(stringify!($name).to_string()));
        $crate::pdf!(@array $array; $($($rest)*)?);
    };
    (@array $array:ident; - $num:literal $(, $($rest:tt)*)?) => {
        $array.push($crate::pdf!(- $num));
        $crate::pdf!(@array $array; $($($rest)*)?);
    };
    (@array $array:ident; $elem:tt $(, $($rest:tt)*)?) => {
        $array.push($crate::pdf!($elem));
        $crate::pdf!(@array $array; $($($rest)*)?);
    };

    // Dictionary entries
    (@dict $dict:ident;) => {};
    (@dict $dict:ident; $key:literal : / $name:ident $(, $($rest:tt)*)?) => {
        $dict.insert($key, $crate::Object::Name(stringify!($name).to_string()));
        $crate::pdf!(@dict $dict; $($($rest)*)?);
    };
    (@dict $dict:ident; $key:literal : - $num:literal $(, $($rest:tt)*)?) => {
        $dict.insert($key, $crate::pdf!(- $num));
        $crate::pdf!(@dict $dict; $($($rest)*)?);
    };
    (@dict $dict:ident; $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $dict.insert($key, $crate::pdf!($value));
        $crate::pdf!(@dict $dict; $($($rest)*)?);
    };

    (null) => {
        $crate::Object::Null
    };

    (true) => {
        $crate::Object::Boolean(true)
    };

    (false) => {
        $crate::Object::Boolean(false)
    };

    (/ $name:ident) => {
        $crate::Object::Name(stringify!($name).to_string())
    };

    ([]) => {
        $crate::Object::Array($crate::Array::new())
    };

    ([ $($tt:tt)+ ]) => {{
        let mut array = $crate::Array::new();
        $crate::pdf!(@array array; $($tt)+);
        $crate::Object::Array(array)
    }};

    ({}) => {
        $crate::Object::Dict($crate::Dict::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut dict = $crate::Dict::new();
        $crate::pdf!(@dict dict; $($tt)+);
        $crate::Object::Dict(dict)
    }};

    (- $num:literal) => {
        $crate::Object::from(-$num)
    };

    ($e:expr) => {
        $crate::Object::from($e)
    };
}
