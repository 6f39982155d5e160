//! User-visible notices. The text is the Vietnamese copy shown in the store.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A list load was attempted without a credential.
    LoginRequired,
    /// A mutation was attempted without a credential.
    NotLoggedIn,
    InvalidDataFormat,
    LoadProductsFailed,
    LoadCategoriesFailed,
    ImageUploaded,
    UploadFailed,
    ProductCreated,
    CreateFailed,
    ProductUpdated,
    UpdateFailed,
    ProductDeleted,
    DeleteFailed,
    // Browse screen
    EmptyCategory,
    CategoryNotFound,
    LoadFailed,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::LoginRequired => "Lỗi: Bạn chưa đăng nhập. Vui lòng đăng nhập để tiếp tục.",
            Notice::NotLoggedIn => "Lỗi: Bạn chưa đăng nhập",
            Notice::InvalidDataFormat => {
                "Lỗi: Định dạng dữ liệu không hợp lệ. Vui lòng thử lại sau."
            }
            Notice::LoadProductsFailed => "Lỗi: Có lỗi xảy ra khi tải sản phẩm. Vui lòng thử lại sau.",
            Notice::LoadCategoriesFailed => {
                "Lỗi: Không thể tải danh sách danh mục. Vui lòng thử lại sau."
            }
            Notice::ImageUploaded => "Thành công: Đã tải lên hình ảnh",
            Notice::UploadFailed => "Lỗi: Không thể tải lên hình ảnh. Vui lòng thử lại sau.",
            Notice::ProductCreated => "Thành công: Đã thêm sản phẩm mới",
            Notice::CreateFailed => "Lỗi: Không thể thêm sản phẩm. Vui lòng thử lại sau.",
            Notice::ProductUpdated => "Thành công: Đã cập nhật sản phẩm",
            Notice::UpdateFailed => "Lỗi: Không thể cập nhật sản phẩm. Vui lòng thử lại sau.",
            Notice::ProductDeleted => "Thành công: Đã xóa sản phẩm",
            Notice::DeleteFailed => "Lỗi: Không thể xóa sản phẩm. Vui lòng thử lại sau.",
            Notice::EmptyCategory => "Không có sản phẩm nào trong danh mục này",
            Notice::CategoryNotFound => "Không tìm thấy danh mục sản phẩm",
            Notice::LoadFailed => "Không thể tải dữ liệu. Vui lòng thử lại sau.",
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Notice::ImageUploaded
            | Notice::ProductCreated
            | Notice::ProductUpdated
            | Notice::ProductDeleted => Level::Success,
            Notice::EmptyCategory | Notice::CategoryNotFound => Level::Info,
            _ => Level::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level() == Level::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_match_prefixes() {
        for notice in [
            Notice::ProductCreated,
            Notice::ProductDeleted,
            Notice::DeleteFailed,
            Notice::LoginRequired,
        ] {
            let success = notice.text().starts_with("Thành công");
            assert_eq!(success, notice.level() == Level::Success, "{notice:?}");
        }
        assert_eq!(Notice::CategoryNotFound.level(), Level::Info);
        assert!(Notice::LoadFailed.is_error());
    }
}
