//! User-facing strings. Server-provided `detail` text always wins over these.

pub const GOAL_REQUIRED: &str = "모든 필수 정보를 입력해주세요.";
pub const GOAL_INVALID_NUMBER: &str = "숫자 형식이 올바르지 않습니다.";
pub const GOAL_SAVED: &str = "목표가 성공적으로 설정되었습니다.";
pub const GOAL_FAILED: &str = "목표 설정 중 오류가 발생했습니다.";

pub const SEARCH_EMPTY_QUERY: &str = "검색할 음식 이름을 입력해주세요.";
pub const SEARCH_NO_RESULTS: &str = "검색 결과가 없습니다. 직접 추가해보세요.";
pub const SEARCH_FAILED: &str = "음식 검색 중 오류 발생";

pub const MANUAL_REQUIRED: &str = "음식 이름과 칼로리는 필수로 입력해야 합니다.";

pub const MEAL_NO_ITEMS: &str = "하나 이상의 음식을 추가해주세요.";
pub const MEAL_NO_DATE: &str = "날짜를 입력해주세요.";
pub const MEAL_SAVED: &str = "식사가 성공적으로 기록되었습니다.";
pub const MEAL_FAILED: &str = "식사 기록 중 오류가 발생했습니다.";

pub const SUMMARY_FAILED: &str = "요약 정보를 불러오는 중 오류가 발생했습니다.";

pub const DELETE_CONFIRM: &str = "정말로 이 식사를 삭제하시겠습니까?";
pub const DELETE_DONE: &str = "식사가 삭제되었습니다.";
pub const DELETE_FAILED: &str = "식사 삭제 중 오류가 발생했습니다.";

pub const SNACKS_NEED_GOAL: &str = "간식 추천을 받으려면 먼저 목표를 설정해주세요.";
pub const SNACKS_FAILED: &str = "간식 추천을 불러오는 중 오류가 발생했습니다.";
pub const SNACKS_NONE: &str = "추천할 간식이 없거나, 아직 추천을 받지 않았습니다.";
