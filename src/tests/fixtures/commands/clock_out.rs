use crate::modules::time_clock::use_cases::clock_out::command::ClockOut;

pub struct ClockOutBuilder {
    inner: ClockOut,
}

impl Default for ClockOutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClockOutBuilder {
    pub fn new() -> Self {
        Self {
            inner: ClockOut {
                org_id: "org-1".into(),
                employee_id: "emp-1".into(),
                time_entry_id: None,
                shift_id: None,
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = Some(v.into());
        self
    }

    pub fn shift_id(mut self, v: impl Into<String>) -> Self {
        self.inner.shift_id = Some(v.into());
        self
    }

    pub fn build(self) -> ClockOut {
        self.inner
    }
}
