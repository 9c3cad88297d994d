/// Clears a progress flag when dropped, so an abandoned simulation never
/// leaves it raised.
pub(crate) struct BusyGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> BusyGuard<'a> {
    pub(crate) fn new(flag: &'a mut bool) -> Self {
        Self { flag }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
