mod prompt_contract;
