//! User-facing flash messages

pub const CREATE_MISSING_FIELDS: &str = "모든 필드를 똑바로 채워주세요!!!!";
pub const POST_CREATED: &str = "게시글이 성공적으로 등록되었음";
pub const POST_NOT_FOUND: &str = "게시글을 찾을 수 없습니다.";
pub const EDIT_MISSING_FIELDS: &str = "제목과 내용을 모두 입력해주세요.";
pub const POST_UPDATED: &str = "게시글이 성공적으로 수정되었습니다.";
pub const POST_DELETED: &str = "게시글이 성공적으로 삭제되었습니다.";
pub const COMMENT_MISSING_FIELDS: &str = "작성자와 내용을 모두 입력해주세요.";
pub const COMMENT_ADDED: &str = "댓글이 등록되었습니다.";
pub const LIKE_ADDED: &str = "좋아요가 등록되었습니다.";
pub const LIKE_REMOVED: &str = "좋아요가 취소되었습니다.";
pub const INVALID_PER_PAGE: &str = "per_page must be a positive integer";

/// JSON lookup miss
pub const DATA_NOT_FOUND: &str = "데이터를 찾을 수 없습니다.";
