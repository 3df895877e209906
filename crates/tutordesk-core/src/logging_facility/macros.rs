//! Canonical logging macros
//!
//! Every directory operation logs exactly one `start` and one `end` (or
//! `end_error`) event, tagged with the calling module as `component`.
//! Callers need `tracing` as a dependency.

#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use tutordesk_core::log_op_start;
/// log_op_start!("create_student");
/// log_op_start!("get_student", student_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use tutordesk_core::log_op_end;
/// log_op_end!("list_students", duration_ms = 3, result_len = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log an operation failure with its error kind and stable code
///
/// `$err` may be anything convertible into `ExError`.
///
/// ```
/// # use tutordesk_core::{log_op_error, errors::DirectoryError};
/// let err = DirectoryError::TutorNotFound { tutor_id: 9 };
/// log_op_error!("hire", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
