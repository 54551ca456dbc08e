//! Color and size vocabulary shared by the bootstrap widgets

/// Color variant for widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
	/// Default color (white/gray, bootstrap's `*-default`)
	Default,
	/// Primary color (blue)
	Primary,
	/// Success color (green)
	Success,
	/// Info color (cyan)
	Info,
	/// Warning color (yellow)
	Warning,
	/// Danger color (red)
	Danger,
}

impl Variant {
	/// Convert variant to its CSS class suffix
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Primary => "primary",
			Self::Success => "success",
			Self::Info => "info",
			Self::Warning => "warning",
			Self::Danger => "danger",
		}
	}
}

/// Size variant for widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
	/// Extra small
	Xs,
	/// Small
	Sm,
	/// Medium (default, no class suffix)
	Md,
	/// Large
	Lg,
}

impl Size {
	/// Convert size to its CSS class suffix
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Xs => "xs",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_variant_as_str() {
		assert_eq!(Variant::Default.as_str(), "default");
		assert_eq!(Variant::Primary.as_str(), "primary");
		assert_eq!(Variant::Danger.as_str(), "danger");
	}

	#[test]
	fn test_size_as_str() {
		assert_eq!(Size::Xs.as_str(), "xs");
		assert_eq!(Size::Lg.as_str(), "lg");
	}
}
