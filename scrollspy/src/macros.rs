#[cfg(feature = "tracing")]
macro_rules! spy_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollspy", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! spy_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! spy_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollspy", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! spy_debug {
    ($($tt:tt)*) => {};
}
