#[cfg(feature = "tracing")]
macro_rules! nav_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollspy_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! nav_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! nav_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollspy_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! nav_debug {
    ($($tt:tt)*) => {};
}
