// standard library
use std::cmp::Ordering;
use std::iter::Peekable;
use std::path::PathBuf;
use std::str::Chars;

/// Extension trait for sorting collections into natural order
///
/// Lexicographic ordering puts `run_10.h5` before `run_2.h5`, which is
/// never what anyone wants for a directory of numbered snapshot files.
/// Natural ordering compares runs of digits by value instead.
///
/// ```rust
/// # use std::path::PathBuf;
/// # use hdf2vtk_utils::SortExt;
/// let mut paths = vec![
///     PathBuf::from("snapshots_s10.h5"),
///     PathBuf::from("snapshots_s2.h5"),
///     PathBuf::from("snapshots_s1.h5"),
/// ];
///
/// paths.sort_natural();
///
/// assert_eq!(paths[0], PathBuf::from("snapshots_s1.h5"));
/// assert_eq!(paths[1], PathBuf::from("snapshots_s2.h5"));
/// assert_eq!(paths[2], PathBuf::from("snapshots_s10.h5"));
/// ```
pub trait SortExt {
    /// Sort in-place, comparing any embedded numbers by value
    fn sort_natural(&mut self);
}

impl SortExt for [PathBuf] {
    fn sort_natural(&mut self) {
        self.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
    }
}

impl SortExt for [String] {
    fn sort_natural(&mut self) {
        self.sort_by(|a, b| natural_cmp(a, b));
    }
}

/// Compare two strings in natural order
///
/// Characters are compared one at a time as usual, but any run of ascii
/// digits is compared as a whole number rather than digit-by-digit.
///
/// ```rust
/// # use std::cmp::Ordering;
/// # use hdf2vtk_utils::natural_cmp;
/// assert_eq!(natural_cmp("write_9", "write_10"), Ordering::Less);
/// assert_eq!(natural_cmp("write_10", "write_10"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut lhs = a.chars().peekable();
    let mut rhs = b.chars().peekable();

    loop {
        match (lhs.peek().copied(), rhs.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let nx = digit_run(&mut lhs);
                let ny = digit_run(&mut rhs);
                match numeric_cmp(&nx, &ny) {
                    Ordering::Equal => (),
                    ordering => return ordering,
                }
            }
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => {
                    lhs.next();
                    rhs.next();
                }
                ordering => return ordering,
            },
        }
    }
}

/// Consume a contiguous run of ascii digits
fn digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            run.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    run
}

/// Compare two digit runs by value, without parsing to a fixed width
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let x = a.trim_start_matches('0');
    let y = b.trim_start_matches('0');

    // longer run of significant digits is always the larger number
    match x.len().cmp(&y.len()) {
        Ordering::Equal => x.cmp(y).then(a.len().cmp(&b.len())),
        ordering => ordering,
    }
}
