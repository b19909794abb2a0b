use std::fs;

use anyhow::Result;
use util::{output_path, run_in_repo_root};

mod util;

#[test]
fn test_single_record_fasta() -> Result<()> {
    let output = output_path("single.fa");
    run_in_repo_root(&format!(
        "clustalo -i test_files/single.fa -o {}",
        output.display()
    ))?;

    assert_eq!(fs::read_to_string(&output)?, ">only\nGATTACAGATTACA\n");
    Ok(())
}

#[test]
fn test_single_record_wrapped() -> Result<()> {
    let output = output_path("single_wrapped.fa");
    run_in_repo_root(&format!(
        "clustalo -i test_files/single.fa --line-width 10 -o {}",
        output.display()
    ))?;

    assert_eq!(fs::read_to_string(&output)?, ">only\nGATTACAGAT\nTACA\n");
    Ok(())
}

#[test]
fn test_single_record_toml() -> Result<()> {
    let output = output_path("single.toml");
    run_in_repo_root(&format!(
        "clustalo -i test_files/single.fa --output-format toml -o {}",
        output.display()
    ))?;

    let output = fs::read_to_string(&output)?;
    assert!(output.contains("[[records]]"));
    assert!(output.contains("name = \"only\""));
    assert!(output.contains("sequence = \"GATTACAGATTACA\""));
    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let output = output_path("config.fa");
    run_in_repo_root(&format!(
        "clustalo -i test_files/single.fa -c test_files/config/options.toml --threads 4 -o {}",
        output.display()
    ))
}

#[test]
fn test_unknown_config_option() {
    let result = run_in_repo_root(
        "clustalo -i test_files/single.fa -c test_files/config/unknown_option.toml",
    );
    assert!(result.is_err());
}

#[test]
fn test_num_threads_config_option() -> Result<()> {
    let output = output_path("num_threads.fa");
    run_in_repo_root(&format!(
        "clustalo -i test_files/single.fa -c test_files/config/num_threads.toml -o {}",
        output.display()
    ))?;

    let error = run_in_repo_root(
        "clustalo -i test_files/single.fa -c test_files/config/zero_num_threads.toml",
    )
    .unwrap_err();
    assert!(
        error.to_string().contains("The alignment option 'threads' is invalid"),
        "{error}"
    );
    Ok(())
}

#[test]
fn test_zero_threads() {
    let error = run_in_repo_root("clustalo -i test_files/single.fa --threads 0").unwrap_err();
    assert!(error.to_string().contains("threads"), "{error}");
}

#[test]
fn test_invalid_dna() {
    let error = run_in_repo_root("clustalo -i test_files/invalid_dna.fa").unwrap_err();
    assert!(
        error.to_string().contains("not part of the DNA alphabet"),
        "{error}"
    );
}

#[test]
fn test_duplicate_ids() {
    let error = run_in_repo_root("clustalo -i test_files/duplicate_ids.fa").unwrap_err();
    assert!(error.to_string().contains("encountered twice"), "{error}");
}

#[test]
fn test_missing_input() {
    assert!(run_in_repo_root("clustalo -i test_files/does_not_exist.fa").is_err());
}

#[cfg(not(feature = "native"))]
#[test]
fn test_native_unavailable() {
    let error = run_in_repo_root("clustalo -i test_files/gattaca.fa").unwrap_err();
    assert!(error.to_string().contains("native"), "{error}");
}

#[cfg(feature = "native")]
mod native {
    use std::fs;

    use anyhow::Result;

    use crate::util::{output_path, run_in_repo_root};

    #[test]
    fn test_align_gattaca() -> Result<()> {
        let output = output_path("gattaca.fa");
        run_in_repo_root(&format!(
            "clustalo -i test_files/gattaca.fa -o {}",
            output.display()
        ))?;

        assert_eq!(
            fs::read_to_string(&output)?,
            ">A\nGATTACA--\n>B\nGATTACANN\n"
        );
        Ok(())
    }

    #[test]
    fn test_align_protein() -> Result<()> {
        let output = output_path("protein.fa");
        run_in_repo_root(&format!(
            "clustalo -i test_files/protein.fa -t protein --line-width 0 -o {}",
            output.display()
        ))?;

        let output = fs::read_to_string(&output)?;
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], ">first");
        assert_eq!(lines[2], ">second");
        assert_eq!(lines[4], ">third");
        assert_eq!(lines[1].len(), lines[3].len());
        assert_eq!(lines[1].len(), lines[5].len());
        Ok(())
    }

    #[test]
    fn test_invalid_dna_as_protein() -> Result<()> {
        let output = output_path("invalid_dna_as_protein.fa");
        run_in_repo_root(&format!(
            "clustalo -i test_files/invalid_dna.fa -t protein -o {}",
            output.display()
        ))
    }
}
