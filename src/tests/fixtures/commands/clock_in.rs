use crate::modules::time_clock::use_cases::clock_in::command::ClockIn;

pub struct ClockInBuilder {
    inner: ClockIn,
}

impl Default for ClockInBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClockInBuilder {
    pub fn new() -> Self {
        Self {
            inner: ClockIn {
                time_entry_id: "te-new".into(),
                org_id: "org-1".into(),
                employee_id: "emp-1".into(),
                shift_id: None,
                force: false,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn shift_id(mut self, v: impl Into<String>) -> Self {
        self.inner.shift_id = Some(v.into());
        self
    }

    pub fn force(mut self, v: bool) -> Self {
        self.inner.force = v;
        self
    }

    pub fn build(self) -> ClockIn {
        self.inner
    }
}
