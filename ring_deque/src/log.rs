#[cfg(feature = "logging")]
macro_rules! trace {
    ($($args:tt)+) => {
        _log::trace!($($args)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($args:tt)+) => {{}};
}

#[cfg(feature = "logging")]
macro_rules! debug {
    ($($args:tt)+) => {
        _log::debug!($($args)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($args:tt)+) => {{}};
}
