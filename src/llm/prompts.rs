use crate::models::{Clause, DocumentType, Language};

/// System prompt for risk analysis
pub const RISK_SYSTEM_PROMPT: &str = "You are a legal expert specializing in contract risk analysis. Provide thorough, accurate risk assessments and practical improvement suggestions for contract clauses. Always format your response exactly as requested in JSON format. Your output should be a direct JSON array of risk analysis objects, not an object containing an array.";

/// System prompt for contract generation
pub const CONTRACT_SYSTEM_PROMPT: &str = "You are a legal expert specializing in drafting professional contracts. Your output is meticulously formatted, legally sound, and comprehensive. Always start contracts directly with the title or header, without any introductory text or explanation. Never include phrases like 'Here is a contract...' or 'I have prepared...' in your output.";

/// System prompt for clause suggestions
pub const SUGGESTIONS_SYSTEM_PROMPT: &str = "You are a legal expert specializing in drafting professional contracts. Your output is meticulously formatted, legally sound, and comprehensive. Always follow the requested JSON format exactly as specified.";

/// Build the user prompt for clause risk analysis
pub fn build_risk_prompt(clauses: &[Clause], language: Language) -> String {
    let mut prompt = String::new();

    if language == Language::Hindi {
        prompt.push_str(
            "Analyze the contract clauses and provide risk analysis in Hindi language. Use proper Hindi legal terminology.\n",
        );
    }

    prompt.push_str(
        "Analyze the following contract clauses for potential legal, business, and compliance risks. For each clause, provide:\n\
         1. Risk Level (High, Medium, Low)\n\
         2. Risk Description\n\
         3. Suggested Improvements\n\n",
    );

    if language == Language::Hindi {
        prompt.push_str("Provide all risk descriptions and suggestions in Hindi.\n\n");
    }

    prompt.push_str("Here are the clauses:\n\n");
    for (index, clause) in clauses.iter().enumerate() {
        prompt.push_str(&format!("CLAUSE {}: {}\n", index + 1, clause.title));
        if clause.is_empty() {
            prompt.push_str("[Empty content - This clause has no content specified]\n\n");
        } else {
            prompt.push_str(&format!("{}\n\n", clause.content));
        }
    }

    prompt.push_str(
        r#"Your response must be formatted as a JSON array (not an object containing an array) with the following exact structure:
[
  {
    "clauseIndex": 0,
    "riskLevel": "medium",
    "risks": ["Risk description 1", "Risk description 2"],
    "suggestions": ["Suggestion 1", "Suggestion 2"]
  }
]

Important: Your response must be a direct JSON array, NOT an object containing an array.
- clauseIndex must be the numeric index of the clause (starting from 0)
- riskLevel must be exactly "high", "medium", or "low" (lowercase)
- risks must be an array of strings
- suggestions must be an array of strings

For clauses with empty content, analyze based on the title and suggest appropriate content.

Your analysis should be detailed but concise, focusing on practical improvements."#,
    );

    prompt
}

/// Build the user prompt for full contract generation
pub fn build_contract_prompt(
    clauses: &[Clause],
    language: Language,
    jurisdiction: Option<&str>,
) -> String {
    let mut prompt = String::new();

    if language == Language::Hindi {
        prompt.push_str(
            "Generate a professional contract in Hindi language. Use proper Hindi legal terminology.\n",
        );
    }
    if let Some(jurisdiction) = jurisdiction {
        prompt.push_str(&format!(
            "This contract is governed by the laws of {}. Please ensure the contract complies with the legal requirements of this jurisdiction.\n",
            jurisdiction
        ));
    }

    prompt.push_str("Generate a professional contract based on the following clauses:\n");
    for clause in clauses {
        prompt.push_str(&format!("{}: {}\n", clause.title, clause.content));
    }

    prompt.push_str(
        "\nPlease format this as a complete, legally-formatted contract with appropriate sections, \
         including but not limited to parties involved, terms, conditions, and signature blocks.\n\n",
    );

    if let Some(jurisdiction) = jurisdiction {
        prompt.push_str(&format!(
            "Include a governing law clause specifying {} as the jurisdiction.\n\n",
            jurisdiction
        ));
    }

    prompt.push_str(
        r#"IMPORTANT: Start directly with the contract title or header. DO NOT include any introduction, explanation, or context sentences like "Here is a comprehensive contract draft..." or "I have prepared a contract...".

Format the output using markdown with the following guidelines:
- Use # for main headings
- Use ## for subheadings
- Use **text** for important terms or definitions
- Use proper paragraph spacing
- Format dates, amounts, and legal references consistently
- Use numbered lists for sequential terms and conditions

For the signature block, please format it like this example:

## Signatures

IN WITNESS WHEREOF, the Parties have executed this Agreement as of the date first written above.

**Client:**

________________________
Name: [Client Name]
Title: [Client Title]
Date: ________________

**Freelancer/Contractor:**

________________________
Name: [Freelancer Name]
Title: [Freelancer Title]
Date: ________________

Do not use any repetitive signature blocks or multiple signature sections."#,
    );

    prompt
}

/// Build the user prompt for additional clause suggestions
pub fn build_suggestions_prompt(
    document_type: DocumentType,
    clauses: &[Clause],
    language: Language,
) -> String {
    let mut prompt = String::new();

    if language == Language::Hindi {
        prompt.push_str(&format!(
            "Generate suggestions in Hindi language. Use proper Hindi legal terminology for a {} contract.\n",
            document_type
        ));
    }

    prompt.push_str(&format!(
        "Generate relevant additional clause suggestions for a {} contract based on the following existing clauses.\n\nExisting clauses:\n",
        document_type
    ));
    for (index, clause) in clauses.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {}: {}\n",
            index + 1,
            clause.title,
            clause.content
        ));
    }

    prompt.push_str(&format!(
        "\nBased on these clauses, suggest 3-4 additional clauses that would complement the contract. These should be clauses that are missing but would be important to include for this type of document.\n\n\
         For the {} document type, think about common industry-standard clauses that would make this document more comprehensive and legally sound.\n\n",
        document_type
    ));

    if language == Language::Hindi {
        prompt.push_str("Please provide all suggestions in Hindi language.\n\n");
    }

    prompt.push_str(
        r#"Your response must be a JSON object with the following exact structure:
{
  "suggestions": [
    {
      "title": "First Suggested Clause Title",
      "content": "Detailed content for the first suggested clause"
    }
  ]
}

Each suggestion should be specific, legally appropriate, and contextually relevant to the existing clauses."#,
    );

    prompt
}
