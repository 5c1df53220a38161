//! Macros for ergonomic context construction.
//!
//! # Examples
//!
//! ```
//! use fanlog::context;
//!
//! let ctx = context! {
//!     "user" => "john",
//!     "attempt" => 3,
//! };
//! assert_eq!(ctx.len(), 2);
//! ```

/// Build a [`LogContext`](crate::LogContext) from `key => value` pairs.
///
/// Fields keep the order they are written in.
///
/// # Examples
///
/// ```
/// use fanlog::context;
///
/// let empty = context! {};
/// assert!(empty.is_empty());
///
/// let ctx = context! { "path" => "/tmp/x", "retries" => 2 };
/// assert_eq!(ctx.len(), 2);
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::LogContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::LogContext::new();
        $(
            ctx.add_field($key, $value);
        )+
        ctx
    }};
}
