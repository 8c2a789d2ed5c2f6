#[cfg(feature = "tracing")]
macro_rules! ktrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollkit", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ktrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! kdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollkit", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! kdebug {
    ($($tt:tt)*) => {};
}
