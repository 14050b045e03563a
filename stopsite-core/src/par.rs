/// Parallel map: apply `$f` to each element of `$slice`, collecting into a Vec.
/// Order of the output matches the order of `$slice`.
macro_rules! par_map {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $slice.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter().map($f).collect()
        }
    }};
}

/// Sequential map with the same shape as `par_map!`, for single-worker runs.
macro_rules! seq_map {
    ($slice:expr, $f:expr) => {{
        $slice.iter().map($f).collect()
    }};
}
