//! Assertion macros and their hidden helpers.

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __location {
    () => {
        $crate::Location {
            file: file!(),
            line: line!(),
        }
    };
}

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __marker() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        __name_of(__marker)
            .trim_end_matches("::__marker")
            .trim_end_matches("::{{closure}}")
    }};
}

/// Assert a condition without aborting the case.
///
/// A false condition records a `FAIL` result attributed to the current
/// suite, case and enclosing function; execution continues in the same case.
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr $(,)?) => {
        if !($cond) {
            $ctx.record_at(
                $crate::Severity::Fail,
                $crate::__location!(),
                $crate::__function_name!(),
                concat!("check failed: ", stringify!($cond)),
            );
        }
    };
    ($ctx:expr, $cond:expr, $($arg:tt)+) => {
        if !($cond) {
            $ctx.record_at(
                $crate::Severity::Fail,
                $crate::__location!(),
                $crate::__function_name!(),
                &format!($($arg)+),
            );
        }
    };
}

/// Assert a condition, aborting the current case when it is false.
///
/// Records the same `FAIL` result as [`check!`], then returns a case-abort
/// signal from the enclosing case body. Other cases and suites are not
/// affected; the suite's teardown still runs.
#[macro_export]
macro_rules! require {
    ($ctx:expr, $cond:expr $(,)?) => {
        if !($cond) {
            $ctx.record_at(
                $crate::Severity::Fail,
                $crate::__location!(),
                $crate::__function_name!(),
                concat!("requirement failed: ", stringify!($cond)),
            );
            return ::core::result::Result::Err($crate::Failure::Signal(
                $crate::Signal::CaseAbort,
            ));
        }
    };
    ($ctx:expr, $cond:expr, $($arg:tt)+) => {
        if !($cond) {
            $ctx.record_at(
                $crate::Severity::Fail,
                $crate::__location!(),
                $crate::__function_name!(),
                &format!($($arg)+),
            );
            return ::core::result::Result::Err($crate::Failure::Signal(
                $crate::Signal::CaseAbort,
            ));
        }
    };
}

/// Record a `WARNING` result. Warnings never affect the exit status.
#[macro_export]
macro_rules! warning {
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.record_at(
            $crate::Severity::Warning,
            $crate::__location!(),
            $crate::__function_name!(),
            &format!($($arg)+),
        );
    };
}
