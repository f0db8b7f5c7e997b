#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	#[test]
	fn test_lox_file() {
		let lox = loxwalk::Lox;
		let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("test.lox");
		let result = lox.run_file(&path);
		assert!(result.is_ok());
	}

	#[test]
	fn missing_file_is_an_internal_error() {
		let lox = loxwalk::Lox;
		let result = lox.run_file("tests/no_such_file.lox");
		assert_eq!(result.unwrap_err().exit_code(), 74);
	}
}
