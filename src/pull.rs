/// Result of one traversal step, either the next element or exhaustion.
///
/// `Pull` is the return type of [`Cursor::step`](crate::Cursor::step), similar
/// to how `Option` represents optional values: every step either hands back a
/// value and permission to keep going, or signals that the sequence is done.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Pull;
///
/// let next: Pull<i32> = Pull::Next(42);
/// let done: Pull<i32> = Pull::Done;
///
/// assert_eq!(next.map(|x| x * 2), Pull::Next(84));
/// assert_eq!(done.map(|x| x * 2), Pull::Done);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// The next element; traversal may continue.
    Next(T),
    /// The sequence is exhausted.
    Done,
}

impl<T> Pull<T> {
    /// Returns `true` if the step produced an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Next(42);
    /// assert!(x.is_next());
    ///
    /// let y: Pull<i32> = Pull::Done;
    /// assert!(!y.is_next());
    /// ```
    #[inline]
    pub const fn is_next(&self) -> bool {
        matches!(self, Pull::Next(_))
    }

    /// Returns `true` if the step signalled exhaustion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Done;
    /// assert!(x.is_done());
    /// ```
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Pull::Done)
    }

    /// Converts from `Pull<T>` to `Option<T>`, consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Next(42);
    /// assert_eq!(x.into_value(), Some(42));
    ///
    /// let y: Pull<i32> = Pull::Done;
    /// assert_eq!(y.into_value(), None);
    /// ```
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Pull::Next(t) => Some(t),
            Pull::Done => None,
        }
    }

    /// Maps a `Pull<T>` to `Pull<U>` by applying a function to the element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Next(21);
    /// assert_eq!(x.map(|v| v * 2), Pull::Next(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Next(t) => Pull::Next(f(t)),
            Pull::Done => Pull::Done,
        }
    }

    /// Returns the element or a default.
    #[inline]
    pub fn next_or(self, default: T) -> T {
        match self {
            Pull::Next(t) => t,
            Pull::Done => default,
        }
    }

    /// Converts from `&Pull<T>` to `Pull<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Next(t) => Pull::Next(t),
            Pull::Done => Pull::Done,
        }
    }

    /// Returns the contained element, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Done`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Next(42);
    /// assert_eq!(x.unwrap_next(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::Pull;
    ///
    /// let x: Pull<i32> = Pull::Done;
    /// x.unwrap_next(); // panics
    /// ```
    #[inline]
    pub fn unwrap_next(self) -> T {
        match self {
            Pull::Next(t) => t,
            Pull::Done => panic!("called `Pull::unwrap_next()` on a `Done` value"),
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Pull::Next(t),
            None => Pull::Done,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    fn from(value: Pull<T>) -> Self {
        value.into_value()
    }
}
