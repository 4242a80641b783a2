pub mod approval;
pub mod dispatch;
pub mod row;
pub mod staff_form;
pub mod staff_requests;
pub mod student_form;

pub use approval::RequestApproval;
pub use dispatch::ApprovedRequests;
pub use staff_form::StaffRequestForm;
pub use staff_requests::StaffRequests;
pub use student_form::StudentRequestForm;
