/// Construct a `Vec` of points from a list of `(x, y)` tuples.
///
/// # Examples
///
/// ```
/// # use navgraph2d::points;
/// # use navgraph2d::core::math::Vector2;
/// let pts = points![(0.0, 0.0), (2.0, 0.0), (1.0, 1.5)];
/// assert_eq!(pts.len(), 3);
/// assert_eq!(pts[2], Vector2::new(1.0, 1.5));
/// ```
#[macro_export]
macro_rules! points {
    ($( $p:expr ),* $(,)?) => {
        {
            let pts: ::std::vec::Vec<$crate::core::math::Vector2<_>> = vec![
                $( $crate::core::math::Vector2::new($p.0, $p.1) ),*
            ];
            pts
        }
    };
}
